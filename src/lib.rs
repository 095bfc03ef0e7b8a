//! # friends-ui
//!
//! Leptos + WASM frontend for the friends feature: an established-friends
//! list with name search, plus sent and received friend-request management.
//!
//! This crate contains the friends page, the shared design-system
//! components it renders with, client-side state, and the REST boundary
//! (wire types, HTTP calls, and signal-backed collection fetch state).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
