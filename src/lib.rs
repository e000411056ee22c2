//! # marquee-client
//!
//! Leptos + WASM frontend for the Marquee movie-streaming application.
//!
//! This crate contains the public marketing page, the loading skeleton, and
//! the authenticated admin area. The admin area is composed by two
//! cooperating components: `AccessGate`, which turns session state into one
//! of three render modes, and `LayoutShell`, which arranges the authorized
//! view's sidebar, header, and content regions.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
