//! Flagship course section: banner, overview, module list, testimonials.

use leptos::prelude::*;

use crate::components::testimonials::TestimonialCarousel;
use crate::content::{COURSE_MODULES, COURSE_TITLE, CourseModule, INCLUDED_ITEMS, Section};
use crate::state::banner::BannerImage;

#[component]
pub fn CourseSection() -> impl IntoView {
    view! {
        <section id=Section::Course.id() class="scroll-mt-24 relative bg-neutral-50">
            <div class="-mx-4 sm:-mx-6 lg:mx-auto lg:max-w-6xl lg:px-8">
                <CourseBanner/>
            </div>

            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 relative z-10 -mt-20 sm:-mt-40 lg:-mt-60">
                <div class="py-16 sm:py-24">
                    <p class="text-xs uppercase tracking-widest text-neutral-500">"Flagship Course"</p>
                    <h2 class="mt-2 text-2xl sm:text-3xl font-semibold tracking-tight">{COURSE_TITLE}</h2>

                    <div class="mt-6 grid grid-cols-1 lg:grid-cols-12 gap-10 items-start">
                        <CourseOverview/>
                        <div class="lg:col-span-7">
                            <h3 class="text-lg font-semibold">"Modules"</h3>
                            <div class="mt-4 grid grid-cols-1 gap-3">
                                {COURSE_MODULES.into_iter().map(module_card).collect_view()}
                            </div>
                        </div>
                    </div>

                    <TestimonialCarousel/>
                </div>
            </div>
        </section>
    }
}

/// Banner image that swaps to the local asset when the remote one fails.
#[component]
fn CourseBanner() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerImage>>();
    let banner_ref = NodeRef::<leptos::html::Img>::new();

    let fall_back = move || {
        banner.maybe_update(|b| {
            let changed = b.on_error();
            #[cfg(feature = "hydrate")]
            {
                if changed {
                    log::warn!("course banner failed to load from {}; using {}", b.remote, b.fallback);
                }
            }
            changed
        });
    };

    // The error event can fire on the server-rendered <img> before the WASM
    // bundle attaches `on:error`; a complete image with no width has failed.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(img) = banner_ref.get() {
                if img.complete() && img.natural_width() == 0 {
                    fall_back();
                }
            }
        });
    }

    view! {
        <img
            node_ref=banner_ref
            src=move || banner.with(BannerImage::src)
            alt="Compass section banner"
            class="block w-full h-auto"
            on:error=move |_| fall_back()
        />
    }
}

#[component]
fn CourseOverview() -> impl IntoView {
    view! {
        <div class="lg:col-span-5 max-w-3xl lg:pr-6">
            <p class="mt-0 text-neutral-700">
                "Screen addiction, anxiety, distractibility, loss of meaning, burnout, the endless comparison culture of social media."
            </p>
            <p class="mt-3 text-neutral-700">
                "While schools lag behind, today\u{2019}s students face psychological, emotional, and structural battles \u{2014} and they demand new tools."
            </p>
            <p class="mt-3 text-neutral-700">
                <span class="font-medium">{COURSE_TITLE}</span>
                " is a 6-week foundational course that teaches the self-management skills schools don\u{2019}t. Grounded in psychology, neuroscience, and philosophy, it offers a powerful toolkit for building lifelong focus, direction, emotional resilience, good habits and mental health."
            </p>
            <h4 class="mt-8 text-base font-semibold text-neutral-900">"What\u{2019}s Included"</h4>
            <p class="mt-2 text-neutral-800">
                "A roadmap on how to sculpt your life and wake up from the grip of habitual forces."
            </p>
            <ul class="mt-3 flex flex-wrap gap-3 text-sm text-neutral-600">
                {INCLUDED_ITEMS
                    .into_iter()
                    .map(|item| view! { <li class="border border-neutral-300 rounded-full px-3 py-1">{item}</li> })
                    .collect_view()}
            </ul>
            <a
                href=Section::Contact.href()
                class="mt-6 sm:mt-8 lg:mt-12 inline-flex items-center justify-center rounded-md bg-black px-5 py-3 text-sm font-medium text-white hover:opacity-90"
            >
                "Book your free consultation"
            </a>
        </div>
    }
}

fn module_card(module: CourseModule) -> impl IntoView {
    view! {
        <div class="relative rounded-lg border border-neutral-200 p-4">
            <div class="flex items-center gap-3">
                <div class="inline-flex h-7 w-7 items-center justify-center rounded-full border border-neutral-300 text-[10px] font-medium text-neutral-600">
                    {module.number}
                </div>
                <div class="font-medium">{module.title}</div>
            </div>
            <p class="mt-1 text-sm leading-snug text-neutral-600">{module.description}</p>
        </div>
    }
}
