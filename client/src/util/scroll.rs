//! Window and element scrolling.
//!
//! Reads the window scroll offset for the header, turns on smooth scrolling
//! for in-page anchors, and scrolls the testimonial track. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! All DOM access is best-effort browser-only behavior; SSR paths safely
//! no-op so the server-rendered header always starts in its top variant.

use leptos::prelude::*;

use crate::state::carousel::ScrollDirection;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Class applied to `<html>` so anchor navigation animates.
pub const SMOOTH_SCROLL_CLASS: &str = "scroll-smooth";

/// Add the smooth-scroll class to the `<html>` element.
pub fn enable_smooth_scroll() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.class_list().add_1(SMOOTH_SCROLL_CLASS);
        }
    }
}

/// Current vertical scroll offset of the window, or `0.0` without one.
pub fn current_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the track horizontally by one step in `direction`.
/// Does nothing when the track is not mounted.
pub fn scroll_track(track: NodeRef<leptos::html::Div>, direction: ScrollDirection) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = track.get_untracked() else {
            log::debug!("testimonial track not mounted; ignoring {direction:?} scroll");
            return;
        };
        let opts = web_sys::ScrollToOptions::new();
        opts.set_left(direction.offset());
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (track, direction);
    }
}
