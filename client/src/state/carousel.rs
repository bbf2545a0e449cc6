//! Testimonial carousel scroll steps.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Horizontal distance (px) each arrow button scrolls the track.
pub const SCROLL_STEP_PX: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Previous,
    Next,
}

impl ScrollDirection {
    /// Signed `left` offset passed to `scrollBy`.
    pub fn offset(self) -> f64 {
        match self {
            ScrollDirection::Previous => -SCROLL_STEP_PX,
            ScrollDirection::Next => SCROLL_STEP_PX,
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            ScrollDirection::Previous => "Previous",
            ScrollDirection::Next => "Next",
        }
    }

    /// Chevron path for the button icon.
    pub fn icon_path(self) -> &'static str {
        match self {
            ScrollDirection::Previous => "M15 18l-6-6 6-6",
            ScrollDirection::Next => "M9 6l6 6-6 6",
        }
    }

    /// Positioning classes; the buttons sit on opposite edges of the track.
    pub fn button_class(self) -> &'static str {
        match self {
            ScrollDirection::Previous => {
                "hidden md:flex absolute inset-y-0 left-2 my-auto h-9 w-9 items-center justify-center rounded-full border border-neutral-300 bg-white/80 hover:bg-white"
            }
            ScrollDirection::Next => {
                "hidden md:flex absolute inset-y-0 right-2 my-auto h-9 w-9 items-center justify-center rounded-full border border-neutral-300 bg-white/80 hover:bg-white"
            }
        }
    }
}
