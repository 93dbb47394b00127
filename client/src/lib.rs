//! # client
//!
//! Leptos + WASM admin front end for the school-records API.
//!
//! This crate contains pages, components, application state, and the browser
//! REST layer. The wire model and list logic (flattening, search, paging)
//! live in the `records` crate so the CLI can share them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
