use super::*;

#[test]
fn default_banner_starts_on_remote_asset() {
    let banner = BannerImage::default();
    assert_eq!(banner.source, BannerSource::Remote);
    assert_eq!(banner.src(), REMOTE_COURSE_BANNER);
}

#[test]
fn load_error_switches_to_fallback() {
    let mut banner = BannerImage::default();
    assert!(banner.on_error());
    assert_eq!(banner.src(), FALLBACK_COURSE_BANNER);
}

#[test]
fn fallback_error_does_not_loop_back_to_remote() {
    let mut banner = BannerImage::default();
    banner.on_error();
    assert!(!banner.on_error());
    assert_eq!(banner.src(), FALLBACK_COURSE_BANNER);
}

#[test]
fn custom_sources_follow_the_same_fallback_rule() {
    let mut banner = BannerImage::new("https://cdn.test/a.png", "/images/a.png");
    assert_eq!(banner.src(), "https://cdn.test/a.png");
    assert!(banner.on_error());
    assert!(!banner.on_error());
    assert_eq!(banner.src(), "/images/a.png");
}

#[test]
fn fallback_is_a_site_relative_path() {
    assert!(FALLBACK_COURSE_BANNER.starts_with("/images/"));
}
