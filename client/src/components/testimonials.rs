//! Horizontally scrolling testimonial track with previous/next arrows.

use leptos::prelude::*;

use crate::content::{TESTIMONIALS, Testimonial};
use crate::state::carousel::ScrollDirection;
use crate::util::scroll::scroll_track;

#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let track_ref = NodeRef::<leptos::html::Div>::new();

    let arrow = move |direction: ScrollDirection| {
        view! {
            <button
                type="button"
                aria-label=direction.aria_label()
                class=direction.button_class()
                on:click=move |_| scroll_track(track_ref, direction)
            >
                <svg
                    width="18"
                    height="18"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d=direction.icon_path()></path>
                </svg>
            </button>
        }
    };

    view! {
        <div class="mt-16">
            <h3 class="text-lg font-semibold">"Testimonials"</h3>
            <div class="mt-6 relative">
                <div
                    aria-hidden="true"
                    class="pointer-events-none absolute left-0 top-0 h-full w-6 bg-gradient-to-r from-white to-transparent"
                ></div>
                <div
                    aria-hidden="true"
                    class="pointer-events-none absolute right-0 top-0 h-full w-6 bg-gradient-to-l from-white to-transparent"
                ></div>
                <div node_ref=track_ref class="flex gap-4 overflow-x-auto snap-x snap-mandatory pb-4">
                    <For each=|| TESTIMONIALS key=Testimonial::key children=testimonial_card/>
                </div>
                {arrow(ScrollDirection::Previous)}
                {arrow(ScrollDirection::Next)}
            </div>
        </div>
    }
}

fn testimonial_card(t: Testimonial) -> impl IntoView {
    view! {
        <figure class="min-w-[85%] sm:min-w-[60%] lg:min-w-[40%] snap-start rounded-lg border border-neutral-200 p-4 bg-white/80 backdrop-blur">
            <blockquote class="text-neutral-800">"\u{201c}" {t.quote} "\u{201d}"</blockquote>
            <figcaption class="mt-4 text-sm text-neutral-500">
                <div class="font-medium text-neutral-700">{t.name}</div>
                {t.school.map(|school| view! { <div>{school}</div> })}
            </figcaption>
        </figure>
    }
}
