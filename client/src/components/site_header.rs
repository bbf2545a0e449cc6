//! Fixed site header with desktop navigation and a collapsible mobile menu.
//!
//! ARCHITECTURE
//! ============
//! The header listens to window `scroll` events (hydrate only) and feeds the
//! offset to `UiState::observe_scroll`, which notifies subscribers only when
//! the variant flips, so scrolling does not re-render the header per frame.

use leptos::prelude::*;

use crate::content::{BOOK_CONSULTATION, NAV_LINKS, NavItem, SITE_NAME, Section};
use crate::state::ui::UiState;

const MENU_CLOSED_ICON: &str = "M3 6h18v2H3V6zm0 5h18v2H3v-2zm0 5h18v2H3v-2z";
const MENU_OPEN_ICON: &str =
    "M18.3 5.7 12 12l6.3 6.3-1.4 1.4L10.6 13.4 4.3 19.7 2.9 18.3 9.2 12 2.9 5.7 4.3 4.3l6.3 6.3 6.3-6.3z";

/// Site header. Shrinks and gains a translucent backdrop once scrolled.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::current_scroll_y;

        let sync_header = move || ui.maybe_update(|s| s.observe_scroll(current_scroll_y()));

        // A reload can restore a mid-page position before any scroll event fires.
        Effect::new(sync_header);

        let handle = window_event_listener(leptos::ev::scroll, move |_| sync_header());
        on_cleanup(move || handle.remove());
    }

    let header_class = move || ui.with(|s| s.header.header_class());
    let bar_class = move || ui.with(|s| s.header.bar_class());
    let logo_class = move || ui.with(|s| s.header.logo_class());
    let menu_open = move || ui.with(|s| s.menu_open);

    view! {
        <header class=header_class>
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <div class=bar_class>
                    <a href=Section::Home.href() class="flex items-center" aria-label="Go to home">
                        <span class=logo_class>{SITE_NAME}</span>
                    </a>

                    <nav class="hidden md:flex items-center gap-1">
                        {NAV_LINKS.into_iter().map(|item| view! { <NavLink item=item/> }).collect_view()}
                        <a
                            href=Section::Contact.href()
                            class="ml-2 inline-flex items-center justify-center rounded-md bg-black px-4 py-2 text-sm font-medium text-white hover:opacity-90"
                        >
                            {BOOK_CONSULTATION}
                        </a>
                    </nav>

                    <button
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                        class="md:hidden inline-flex items-center justify-center rounded-md border border-neutral-300 px-3 py-2 text-sm"
                        on:click=move |_| ui.update(UiState::toggle_menu)
                    >
                        <span class="sr-only">"Menu"</span>
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                            <path d=move || if menu_open() { MENU_OPEN_ICON } else { MENU_CLOSED_ICON }></path>
                        </svg>
                    </button>
                </div>
            </div>

            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden border-t border-neutral-200 bg-white">
                                <div class="mx-auto max-w-6xl px-2 py-2">
                                    {NAV_LINKS.into_iter().map(|item| view! { <NavLink item=item/> }).collect_view()}
                                    <a
                                        href=Section::Contact.href()
                                        class="mx-2 my-2 block rounded-md bg-black px-4 py-3 text-center text-sm font-medium text-white"
                                        on:click=move |_| ui.update(UiState::close_menu)
                                    >
                                        {BOOK_CONSULTATION}
                                    </a>
                                </div>
                            </div>
                        }
                    })
            }}
        </header>
    }
}

/// Anchor link that also closes the mobile menu.
#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <a
            href=item.section.href()
            class="block px-4 py-2 text-sm md:text-base text-neutral-700 hover:text-black"
            on:click=move |_| ui.update(UiState::close_menu)
        >
            {item.label}
        </a>
    }
}
