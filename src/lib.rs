//! # chefgpt-client
//!
//! Leptos + WASM frontend for the ChefGPT recipe application: AI-assisted
//! recipe generation, a personal cookbook, a community feed, and cookie-based
//! session auth against the REST backend.
//!
//! This crate contains pages, components, application state, the wire types,
//! and the REST wrappers. The backend itself lives in a separate service and
//! is only reached over `/api/...`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
