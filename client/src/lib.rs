//! # bookings-client
//!
//! Leptos + WASM front-end for the service bookings platform. Clients browse
//! services and reserve slots; providers publish services and review their
//! booking history. Pricing, availability, and balances are owned by the remote
//! bookings API; this crate holds the login session, guards routes, and calls
//! the API.
#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod paths;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
