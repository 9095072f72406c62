//! # mailbrief
//!
//! Leptos + WASM single-page client for on-demand email summaries.
//!
//! The user clicks one button; the client asks the backend to summarize the
//! last 24 hours of email, walks through a popup-based Google authentication
//! flow when the backend reports the session as unauthenticated, and renders
//! the resulting summary as Markdown.
//!
//! Browser-only code (HTTP, popup handling, timers, console logging) lives
//! behind the `csr` cargo feature so the default native build compiles only
//! the pure logic and its tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console hooks and mount the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
