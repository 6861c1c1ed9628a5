//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! This crate contains pages, components, presentation state (color scheme,
//! section navigation, debounced scroll), and the browser glue behind them.
//! The server crate renders `app::App` with SSR; the `hydrate` feature builds
//! the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
