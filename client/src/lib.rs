//! # client
//!
//! Leptos + WASM frontend for the laboratory stockroom inventory.
//!
//! This crate contains the route pages, list views, edit/create modals, the
//! state containers they share, and the browser Resource Client for the
//! inventory REST API. The `server` crate renders it with the `ssr` feature;
//! the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
