//! Page footer with copyright line and section links.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, SITE_NAME};
use crate::util::year::current_year;

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {SITE_NAME}. All rights reserved.")
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    // Server and browser clocks can disagree around New Year; the browser
    // value wins once hydrated.
    let year = RwSignal::new(current_year());
    Effect::new(move || year.set(current_year()));

    view! {
        <footer class="border-t border-neutral-200">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <div class="py-10 flex flex-col sm:flex-row items-start sm:items-center justify-between gap-4">
                    <p class="text-sm text-neutral-500">
                        {move || copyright_line(year.get())}
                    </p>
                    <div class="flex items-center gap-4 text-sm text-neutral-500">
                        {NAV_LINKS
                            .into_iter()
                            .map(|item| view! { <a href=item.section.href() class="hover:text-black">{item.label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
