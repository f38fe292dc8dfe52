//! # client
//!
//! Leptos + WASM frontend for the blogdesk content-management screens.
//!
//! This crate contains the post composer, the dashboard shell, their local
//! state machines, and the network collaborators they talk to (the post
//! creation endpoint and the image content store).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    log::debug!("hydrating blogdesk client");
    leptos::mount::hydrate_body(app::App);
}
