//! Error panel with an authentication hint for auth-related failures.

#[cfg(test)]
#[path = "error_panel_test.rs"]
mod error_panel_test;

use leptos::prelude::*;

use crate::state::session::{ErrorKind, SessionError, SessionPhase};

/// Hint shown under auth-related errors.
pub(crate) const AUTH_HINT: &str =
    "Please complete the Google authentication in the popup window to continue.";

/// The hint renders only for failures where authentication is the fix.
/// This switches on the error kind, never on the message text.
pub(crate) fn shows_auth_hint(error: &SessionError) -> bool {
    error.kind == ErrorKind::AuthRequired
}

/// Error panel; renders nothing unless the session is in `Failed`.
#[component]
pub fn ErrorPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionPhase>>();

    view! {
        {move || {
            session
                .get()
                .error()
                .cloned()
                .map(|err| {
                    let hint = shows_auth_hint(&err);
                    view! {
                        <div class="error-message">
                            <p>{format!("Error: {}", err.message)}</p>
                            {hint.then(|| view! { <p class="error-message__hint">{AUTH_HINT}</p> })}
                        </div>
                    }
                })
        }}
    }
}
