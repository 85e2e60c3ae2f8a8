//! # client
//!
//! Leptos + WASM frontend for the Aricia Residences site.
//!
//! The page is server-rendered by the `server` crate and hydrated in the
//! browser. All tour logic lives in the `tour` crate; this crate renders its
//! models, forwards pointer/timer/click events into a `TourSession`, and
//! handles the lead form and its calls to the email relay.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
