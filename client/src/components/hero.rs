//! Full-viewport hero with a one-time entrance animation.

use leptos::prelude::*;

use crate::content::{BOOK_CONSULTATION, SITE_DESCRIPTION, Section};
use crate::state::ui::UiState;

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Effects only run after hydration, so the server markup carries the
    // hidden classes and the browser transitions them in.
    Effect::new(move || {
        ui.maybe_update(UiState::reveal);
    });

    let headline_class = move || ui.with(UiState::hero_class);

    view! {
        <section id=Section::Home.id() class="relative min-h-screen flex items-center justify-start">
            <div aria-hidden="true" class="absolute inset-0 z-0 pointer-events-none overflow-hidden">
                <div class="absolute inset-0 hero-sky"></div>
                <div class="hero-cloud hero-cloud--near"></div>
                <div class="hero-cloud hero-cloud--far"></div>
                <div class="hero-wisp hero-wisp--a"></div>
                <div class="hero-wisp hero-wisp--b"></div>
                <div class="absolute inset-0 hero-fade-into-next"></div>
            </div>

            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="py-20 sm:py-28">
                    <div class=headline_class>
                        <h1 class="text-4xl/tight sm:text-5xl font-semibold tracking-tight">
                            "From Chaos to Clarity"
                        </h1>
                        <p class="mt-5 max-w-2xl text-base sm:text-lg text-neutral-600">{SITE_DESCRIPTION}</p>
                        <div class="mt-8 flex flex-col sm:flex-row sm:items-center gap-3">
                            <a
                                href=Section::Contact.href()
                                class="inline-flex items-center justify-center rounded-md bg-black px-5 py-3 text-sm font-medium text-white hover:opacity-90"
                            >
                                {BOOK_CONSULTATION}
                            </a>
                            <a
                                href=Section::Course.href()
                                class="inline-flex items-center justify-center rounded-md border border-neutral-300 px-5 py-3 text-sm font-medium text-neutral-800 hover:border-neutral-400"
                            >
                                "Learn more"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
