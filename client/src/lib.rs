//! # clerk-demo-client
//!
//! Leptos + WASM frontend for the Clerk demo.
//!
//! This crate contains pages, components, application state, network types,
//! and the debug reader. The server crate renders it with SSR and reuses the
//! wire types in `net::types`.

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
