//! REST API helpers for communicating with the summary backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error since the endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Response classification is a pure function over (status, body text) so
//! every branch of the contract is testable off-wasm. Transport failures
//! surface as the outer `Err` with the transport error's own text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use super::types::{ErrorBody, SummaryBody};

/// Fixed backend origin. The backend exposes no configuration surface, so
/// neither does the client.
pub const API_BASE: &str = "http://localhost:5000";

/// Fallback error text when a non-2xx body carries no usable message.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch summary";

/// Fallback text when a 401 body carries no usable message.
pub const AUTH_REQUIRED_FALLBACK: &str = "Please authenticate with Google first";

#[cfg(any(test, feature = "csr"))]
pub(crate) fn summary_endpoint() -> String {
    format!("{API_BASE}/get-summary")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn auth_endpoint() -> String {
    format!("{API_BASE}/auth")
}

/// Classified outcome of a summary request that reached the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryResponse {
    /// 2xx with a summary body.
    Summary(String),
    /// 401; carries the backend's message for the capped-retry error path.
    Unauthorized(String),
    /// Any other non-2xx; carries the backend's message or the generic fallback.
    Failed(String),
}

/// Map a raw (status, body) pair onto the backend contract.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn interpret_response(status: u16, body: &str) -> SummaryResponse {
    if status == 401 {
        return SummaryResponse::Unauthorized(error_message(body, AUTH_REQUIRED_FALLBACK));
    }
    if (200..300).contains(&status) {
        return match serde_json::from_str::<SummaryBody>(body) {
            Ok(parsed) => SummaryResponse::Summary(parsed.summary),
            Err(_) => SummaryResponse::Failed(GENERIC_FETCH_ERROR.to_owned()),
        };
    }
    SummaryResponse::Failed(error_message(body, GENERIC_FETCH_ERROR))
}

/// Extract the backend's `message` field, falling back when absent or blank.
#[cfg(any(test, feature = "csr"))]
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Request the summary of the last 24 hours of email.
///
/// # Errors
///
/// Returns the transport error's text when the request never reached the
/// backend. Backend-level failures are part of the `Ok` classification.
pub async fn fetch_summary() -> Result<SummaryResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&summary_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(interpret_response(status, &body))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available off-browser".to_owned())
    }
}
