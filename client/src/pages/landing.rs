//! Single-page landing layout: header, hero, course, contact, about, footer.

use leptos::prelude::*;

use crate::components::{
    about::AboutSection, contact_form::ContactSection, course::CourseSection, hero::Hero,
    site_footer::SiteFooter, site_header::SiteHeader,
};
use crate::util::scroll::enable_smooth_scroll;

/// Landing page. Sections are anchored so header links scroll in-page.
#[component]
pub fn LandingPage() -> impl IntoView {
    Effect::new(enable_smooth_scroll);

    view! {
        <div class="min-h-screen bg-white text-black">
            <SiteHeader/>
            <Hero/>
            <CourseSection/>
            <ContactSection/>
            <AboutSection/>
            <SiteFooter/>
        </div>
    }
}
