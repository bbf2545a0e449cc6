#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_scroll_y_is_zero_in_non_hydrate_tests() {
    assert!(current_scroll_y().abs() < f64::EPSILON);
}

#[test]
fn enable_smooth_scroll_is_noop_but_callable() {
    enable_smooth_scroll();
    enable_smooth_scroll();
}

#[test]
fn scroll_track_without_browser_is_noop_but_callable() {
    let track = NodeRef::<leptos::html::Div>::new();
    scroll_track(track, ScrollDirection::Next);
    scroll_track(track, ScrollDirection::Previous);
}

#[test]
fn smooth_scroll_class_matches_tailwind_utility() {
    assert_eq!(SMOOTH_SCROLL_CLASS, "scroll-smooth");
}
