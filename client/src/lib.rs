//! # client
//!
//! Leptos frontend for the Safe Upload login screen.
//!
//! The crate holds the route shell, the Home and Login pages, the login form
//! state machine and the browser transports (`gloo-net`) that plug into the
//! shared `login-flow` pipeline. The same components render on the server
//! (`ssr`) and hydrate in the browser (`hydrate`).

pub mod app;
pub mod net;
pub mod pages;
pub mod state;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
