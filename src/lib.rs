//! # spendbook
//!
//! Leptos + WASM client for a personal expense-tracker REST API.
//! Replaces the React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the wire
//! types, and the HTTP client used to talk to the backend. Browser-only
//! code (HTTP, localStorage) is gated behind the `hydrate` feature so
//! the pure state logic stays testable on any target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
