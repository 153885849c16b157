//! # client
//!
//! Leptos + WASM frontend for the product list.
//!
//! This crate contains the list page, its filter/table/pager components, the
//! page state container, the async fetch wrappers around the mock catalog,
//! and the URL query synchronization helpers. It is rendered on the server
//! (`ssr`) and hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // Logger already installed; keep it.
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
