//! # client
//!
//! Leptos + WASM frontend for the concert journal.
//!
//! This crate contains the sign-in flow, the journal page, application
//! state, and the REST client. The `ssr` feature renders it inside the
//! server; `hydrate` builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
