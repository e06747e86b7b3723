//! # ecofinds-client
//!
//! Leptos + WASM frontend for the EcoFinds second-hand marketplace.
//! Browsing, cart, checkout, selling, and profile management all run
//! client-side against the JSON API.
//!
//! This crate contains pages, components, application state, network
//! types, and the typed API client.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
