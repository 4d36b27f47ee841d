//! # agent-chat
//!
//! Leptos + WASM chat front-end for an external agent backend.
//!
//! Two variants share one message log renderer: a streaming page that keeps
//! a WebSocket to `/ws/chat/` open and tags each question with a persistent
//! session id, and a classic page that posts each question to `/chat/` and
//! appends the returned responses.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
