//! # client
//!
//! Leptos + WASM frontend for the path-finding grid editor.
//!
//! This crate contains the control bar, the shared UI state, the HTTP client
//! for the pathfinding service, and browser helpers. It integrates with the
//! `grid` crate for cell state and SVG rendering via the `GridHost` bridge
//! component.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Install logging and the panic hook, then mount [`app::App`] on the page body.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    log::info!("starting grid editor");
    leptos::mount::mount_to_body(app::App);
}
