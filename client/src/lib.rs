//! # client
//!
//! Leptos + WASM frontend for the First Principles Education landing page.
//!
//! The server renders the page with the `ssr` feature; the browser bundle is
//! built with `hydrate` and attaches the interactive behavior (header scroll
//! state, mobile menu, banner fallback, testimonial scrolling, contact form
//! acknowledgement) to the server-rendered markup.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating landing page");
    leptos::mount::hydrate_body(app::App);
}
