//! Session controller: drives the summary request and the popup auth flow.
//!
//! FLOW
//! ====
//! 1. **Request** — set `Loading`, issue `GET /get-summary`.
//! 2. **Classify** — success stores the summary; a first 401 enters the
//!    authentication flow; anything else becomes a terminal `Failed`.
//! 3. **Authenticate** — set `Authenticating`, open the popup, poll until it
//!    closes, then retry the request exactly once. A 401 on the retry is
//!    surfaced as `AuthRequired` instead of looping again.
//!
//! Every await is followed by a cancellation check so tasks outliving the
//! view (teardown, superseded request) write no further state.

#[cfg(test)]
#[path = "session_actions_test.rs"]
mod session_actions_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use crate::net::api::SummaryResponse;
#[cfg(any(test, feature = "csr"))]
use crate::state::session::{ErrorKind, SessionError};
use crate::state::session::SessionPhase;
#[cfg(feature = "csr")]
use crate::util::popup;
use crate::util::popup::WatchHandle;

/// Next controller step after a summary request completes.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    Store(String),
    BeginAuth,
    Fail(SessionError),
}

/// Map a request outcome to the next step.
///
/// `after_auth` marks the single retry permitted after an authentication
/// round; an unauthorized result then becomes a terminal failure rather than
/// another auth cycle.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn decide(result: Result<SummaryResponse, String>, after_auth: bool) -> Decision {
    match result {
        Ok(SummaryResponse::Summary(text)) => Decision::Store(text),
        Ok(SummaryResponse::Unauthorized(_)) if !after_auth => Decision::BeginAuth,
        Ok(SummaryResponse::Unauthorized(message)) => {
            Decision::Fail(SessionError::new(ErrorKind::AuthRequired, message))
        }
        Ok(SummaryResponse::Failed(message)) => {
            Decision::Fail(SessionError::new(ErrorKind::Backend, message))
        }
        Err(message) => Decision::Fail(SessionError::new(ErrorKind::Transport, message)),
    }
}

/// Phase to write once a request settles, or `None` when the watch was
/// cancelled and the task must write nothing.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn next_phase(cancelled: bool, decision: Decision) -> Option<SessionPhase> {
    if cancelled {
        return None;
    }
    Some(match decision {
        Decision::Store(text) => SessionPhase::Ready(text),
        Decision::Fail(err) => SessionPhase::Failed(err),
        Decision::BeginAuth => SessionPhase::Authenticating,
    })
}

/// Begin a summary request unless one is already in flight.
///
/// The guard lives here, not in the view: a busy phase ignores the call even
/// if something other than the (disabled) button triggers it. `Loading` is
/// set synchronously, before the task is spawned, so the guard holds with no
/// window for a second call to slip through. Any watcher left over from a
/// previous request is cancelled before the new one starts.
pub fn request_summary(session: RwSignal<SessionPhase>, watch: StoredValue<WatchHandle>) {
    if session.get_untracked().is_busy() {
        return;
    }

    let handle = WatchHandle::default();
    watch.update_value(|current| {
        current.cancel();
        *current = handle.clone();
    });

    let _ = session.try_set(SessionPhase::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(run_summary_flow(session, handle, false));
    #[cfg(not(feature = "csr"))]
    {
        let _ = handle;
    }
}

/// Issue the request and settle it. The caller has already set `Loading`.
#[cfg(feature = "csr")]
async fn run_summary_flow(session: RwSignal<SessionPhase>, handle: WatchHandle, after_auth: bool) {
    let result = crate::net::api::fetch_summary().await;
    let decision = decide(result, after_auth);
    let begins_auth = matches!(decision, Decision::BeginAuth);

    let Some(next) = next_phase(handle.is_cancelled(), decision) else {
        return;
    };
    if let SessionPhase::Failed(err) = &next {
        leptos::logging::warn!("summary request failed: {}", err.message);
    }
    let _ = session.try_set(next);

    if begins_auth {
        begin_auth(session, handle).await;
    }
}

/// Open the auth popup and retry the request once it closes. The caller has
/// already set `Authenticating`.
#[cfg(feature = "csr")]
async fn begin_auth(session: RwSignal<SessionPhase>, handle: WatchHandle) {
    let Some(popup_window) = popup::open_auth_popup() else {
        leptos::logging::warn!("auth popup was blocked");
        let _ = session.try_set(SessionPhase::Failed(SessionError::popup_blocked()));
        return;
    };

    if popup::watch_until_closed(&popup_window, &handle).await {
        let _ = session.try_set(SessionPhase::Loading);
        Box::pin(run_summary_flow(session, handle, true)).await;
    }
}
