//! # blogscope
//!
//! Leptos + WASM frontend for the BlogScope blog platform. Replaces the
//! React + styled-components client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the
//! role-to-capability permission model, and the REST resource client for
//! the mock backend. Authentication is a thin session layer: the signed-in
//! user record is cached in `localStorage` and restored on startup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod permissions;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
