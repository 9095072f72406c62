//! Wire types for the backend's JSON bodies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Body of a successful `GET /get-summary` response.
#[derive(Clone, Debug, Deserialize)]
pub struct SummaryBody {
    pub summary: String,
}

/// Optional error payload the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
