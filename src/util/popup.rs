//! Authentication popup helpers: open the window, poll until it closes.
//!
//! LIFECYCLE
//! =========
//! The popup itself is owned by the browser; the client only polls its
//! `closed` property. Each polling loop is scoped by a `WatchHandle` so
//! teardown or a superseding request stops the timer instead of leaving it
//! running for the lifetime of the page.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Window name passed to `window.open`.
pub const AUTH_POPUP_NAME: &str = "Google Authentication";

/// Fixed popup dimensions from the backend's auth flow contract.
pub const AUTH_POPUP_FEATURES: &str = "width=600,height=800";

/// How often the popup's `closed` property is polled.
pub const CLOSE_POLL_INTERVAL_MS: u64 = 1_000;

/// Cancellation flag shared between a request's async tasks and the view.
///
/// Clones observe the same flag. Once cancelled, a handle stays cancelled;
/// a new request gets a fresh handle.
#[derive(Clone, Debug, Default)]
pub struct WatchHandle {
    cancelled: Arc<AtomicBool>,
}

impl WatchHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Open the authentication popup. Returns `None` when the browser blocks it.
#[cfg(feature = "csr")]
pub fn open_auth_popup() -> Option<web_sys::Window> {
    let window = web_sys::window()?;
    window
        .open_with_url_and_target_and_features(
            &crate::net::api::auth_endpoint(),
            AUTH_POPUP_NAME,
            AUTH_POPUP_FEATURES,
        )
        .ok()
        .flatten()
}

/// Poll the popup until it closes or the handle is cancelled.
///
/// Returns `true` when the popup closed and `false` when the watch was
/// cancelled first. An unreadable `closed` property counts as closed.
#[cfg(feature = "csr")]
pub async fn watch_until_closed(popup: &web_sys::Window, handle: &WatchHandle) -> bool {
    loop {
        if handle.is_cancelled() {
            return false;
        }
        if popup.closed().unwrap_or(true) {
            return true;
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(CLOSE_POLL_INTERVAL_MS)).await;
    }
}
