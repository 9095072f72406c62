//! Session state machine for the summary flow.
//!
//! DESIGN
//! ======
//! One closed enum replaces the loose `loading`/`authenticating`/`error`/
//! `summary` bundle: the session is always in exactly one phase, so states
//! like "loading and authenticating at once" cannot be represented.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Where the summary session currently is.
///
/// Transitions: `Idle → Loading → {Ready | Failed | Authenticating}`;
/// `Authenticating` re-enters `Loading` exactly once after the popup closes.
/// `Ready` and `Failed` only re-enter `Loading` via a new user click.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading,
    Authenticating,
    Ready(String),
    Failed(SessionError),
}

impl SessionPhase {
    /// Whether a request or authentication round is in flight.
    ///
    /// Busy phases disable the trigger button and make the controller ignore
    /// further requests.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Authenticating)
    }

    /// The stored summary text, if the session reached `Ready`.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Ready(text) => Some(text),
            _ => None,
        }
    }

    /// The stored error, if the session reached `Failed`.
    pub fn error(&self) -> Option<&SessionError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A terminal failure shown in the error panel.
///
/// Presentation logic switches on `kind`, never on the message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl SessionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// The popup never opened, so authentication cannot proceed.
    pub fn popup_blocked() -> Self {
        Self::new(
            ErrorKind::PopupBlocked,
            "The authentication popup was blocked. Allow popups for this site and try again.",
        )
    }
}

/// Failure categories the client distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never reached the backend (network/transport failure).
    Transport,
    /// The backend answered with a non-2xx status other than 401.
    Backend,
    /// The backend still rejects the session after an authentication round.
    AuthRequired,
    /// `window.open` was refused by the browser.
    PopupBlocked,
}
