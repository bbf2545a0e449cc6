use super::*;
use std::collections::HashSet;

#[test]
fn section_href_is_anchor_to_id() {
    for section in Section::ALL {
        assert_eq!(section.href(), format!("#{}", section.id()));
    }
}

#[test]
fn nav_links_point_at_about_course_contact_in_order() {
    let targets: Vec<Section> = NAV_LINKS.iter().map(|n| n.section).collect();
    assert_eq!(targets, vec![Section::About, Section::Course, Section::Contact]);
}

#[test]
fn course_modules_are_numbered_sequentially() {
    for (i, module) in COURSE_MODULES.iter().enumerate() {
        assert_eq!(module.number, format!("{:02}", i + 1));
        assert!(!module.title.is_empty());
        assert!(!module.description.is_empty());
    }
}

#[test]
fn testimonial_key_uses_name_and_quote_prefix() {
    let t = Testimonial { quote: "Screen time lowered.", name: "Anonymous", school: None };
    assert_eq!(t.key(), "AnonymousScreen time ");
}

#[test]
fn testimonial_key_handles_short_quotes() {
    let t = Testimonial { quote: "Great", name: "Ada", school: None };
    assert_eq!(t.key(), "AdaGreat");
}

#[test]
fn testimonial_key_counts_characters_not_bytes() {
    let t = Testimonial { quote: "\u{201c}Café au lait, please\u{201d}", name: "Zoë", school: None };
    assert_eq!(t.key(), "Zoë\u{201c}Café au lai");
}

#[test]
fn testimonial_keys_are_unique() {
    let keys: HashSet<String> = TESTIMONIALS.iter().map(Testimonial::key).collect();
    assert_eq!(keys.len(), TESTIMONIALS.len());
}

#[test]
fn about_video_is_an_embed_url() {
    assert!(ABOUT_VIDEO_URL.starts_with("https://www.youtube.com/embed/"));
}
