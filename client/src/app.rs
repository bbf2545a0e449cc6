//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{SITE_DESCRIPTION, SITE_NAME};
use crate::pages::landing::LandingPage;
use crate::state::{banner::BannerImage, contact::ContactState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-view state contexts and routes `/` to the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let banner = RwSignal::new(BannerImage::default());
    let contact = RwSignal::new(ContactState::default());

    provide_context(ui);
    provide_context(banner);
    provide_context(contact);

    view! {
        <Stylesheet id="leptos" href="/pkg/first-principles.css"/>
        <Title text=SITE_NAME/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
