//! About section with an embedded introduction video.

use leptos::prelude::*;

use crate::content::{ABOUT_VIDEO_ALLOW, ABOUT_VIDEO_URL, SITE_NAME, Section};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="scroll-mt-24 border-t border-neutral-200 lg:flex-1">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <div class="py-16 sm:py-24 grid grid-cols-1 lg:grid-cols-2 gap-10 items-start">
                    <div>
                        <h2 class="text-2xl sm:text-3xl font-semibold tracking-tight">"About Us"</h2>
                        <p class="mt-5 text-neutral-700 leading-relaxed">
                            {SITE_NAME}
                            " is dedicated to filling the gaps of modern education."
                        </p>
                        <p class="mt-4 text-neutral-700 leading-relaxed">
                            "We help students escape traps of endless distraction and toxic stress by teaching them how to break unwanted patterns, find value-alignment and be present."
                        </p>
                    </div>
                    <div>
                        <div class="relative w-full overflow-hidden rounded-lg border border-neutral-200">
                            // 16:9 responsive embed
                            <div class="relative pt-[56.25%]">
                                <iframe
                                    class="absolute inset-0 h-full w-full"
                                    src=ABOUT_VIDEO_URL
                                    title="About video"
                                    allow=ABOUT_VIDEO_ALLOW
                                    allowfullscreen=true
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
