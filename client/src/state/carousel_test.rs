use super::*;

#[test]
fn next_scrolls_right_by_fixed_step() {
    assert!((ScrollDirection::Next.offset() - 400.0).abs() < f64::EPSILON);
}

#[test]
fn previous_scrolls_left_by_fixed_step() {
    assert!((ScrollDirection::Previous.offset() + 400.0).abs() < f64::EPSILON);
}

#[test]
fn directions_are_symmetric() {
    let sum = ScrollDirection::Next.offset() + ScrollDirection::Previous.offset();
    assert!(sum.abs() < f64::EPSILON);
}

#[test]
fn aria_labels_match_direction() {
    assert_eq!(ScrollDirection::Previous.aria_label(), "Previous");
    assert_eq!(ScrollDirection::Next.aria_label(), "Next");
}

#[test]
fn buttons_anchor_to_opposite_edges() {
    assert!(ScrollDirection::Previous.button_class().contains("left-2"));
    assert!(ScrollDirection::Next.button_class().contains("right-2"));
}
