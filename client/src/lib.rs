//! # client
//!
//! Leptos UI for the portfolio site, rendered on the server (`ssr`) and
//! hydrated in the browser (`hydrate`).
//!
//! This crate contains pages, components, UI state and the thin browser glue
//! that backs the `prefs` storage and signal traits with `web-sys`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
