//! Local UI chrome state (mobile menu, header density, hero reveal).
//!
//! DESIGN
//! ======
//! The header's look is a pure function of the window scroll offset, so the
//! threshold logic lives here and the component only feeds it `scroll_y`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset (px) past which the header switches to its compact variant.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Visual variant of the fixed header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    /// At (or near) the top of the page: tall, transparent, borderless.
    #[default]
    Top,
    /// Scrolled past the threshold: compact, translucent, bordered.
    Scrolled,
}

impl HeaderVariant {
    /// Strictly greater than the threshold is scrolled; NaN and negative
    /// overscroll count as top.
    pub fn from_scroll_y(scroll_y: f64) -> Self {
        if scroll_y > SCROLL_THRESHOLD_PX {
            HeaderVariant::Scrolled
        } else {
            HeaderVariant::Top
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == HeaderVariant::Scrolled
    }

    /// Classes for the outer `<header>` element.
    pub fn header_class(self) -> &'static str {
        match self {
            HeaderVariant::Scrolled => {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 pt-[env(safe-area-inset-top)] border-b border-neutral-200 bg-white/80 backdrop-blur"
            }
            HeaderVariant::Top => {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 pt-[env(safe-area-inset-top)] border-b-0 bg-transparent"
            }
        }
    }

    /// Classes for the inner bar; its height shrinks once scrolled.
    pub fn bar_class(self) -> &'static str {
        match self {
            HeaderVariant::Scrolled => "flex items-center justify-between transition-all duration-300 h-16 py-0",
            HeaderVariant::Top => "flex items-center justify-between transition-all duration-300 h-24 sm:h-28 py-2",
        }
    }

    /// Classes for the wordmark text.
    pub fn logo_class(self) -> &'static str {
        match self {
            HeaderVariant::Scrolled => "font-medium tracking-wide transition-all duration-300 text-base",
            HeaderVariant::Top => "font-medium tracking-wide transition-all duration-300 text-lg sm:text-xl",
        }
    }
}

/// UI state for the header, mobile menu, and hero entrance animation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub header: HeaderVariant,
    pub revealed: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Feed a window scroll offset. Returns `true` when the header variant changed.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let next = HeaderVariant::from_scroll_y(scroll_y);
        if next == self.header {
            return false;
        }
        self.header = next;
        true
    }

    /// Trigger the one-time hero entrance. Returns `true` only on the first call.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Classes for the hero headline block, before and after the reveal.
    pub fn hero_class(&self) -> &'static str {
        if self.revealed {
            "max-w-3xl mr-auto text-left transform-gpu transition-all duration-[8500ms] ease-out opacity-100 translate-y-0"
        } else {
            "max-w-3xl mr-auto text-left transform-gpu transition-all duration-[8500ms] ease-out opacity-0 translate-y-2"
        }
    }
}
