use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_point_at_fixed_local_origin() {
    assert_eq!(summary_endpoint(), "http://localhost:5000/get-summary");
    assert_eq!(auth_endpoint(), "http://localhost:5000/auth");
}

// =============================================================
// Success classification
// =============================================================

#[test]
fn ok_response_with_summary_returns_text() {
    let resp = interpret_response(200, r#"{"summary":"Hello"}"#);
    assert_eq!(resp, SummaryResponse::Summary("Hello".to_owned()));
}

#[test]
fn ok_response_with_malformed_body_falls_back_to_generic_error() {
    let resp = interpret_response(200, "not json");
    assert_eq!(resp, SummaryResponse::Failed(GENERIC_FETCH_ERROR.to_owned()));
}

// =============================================================
// Unauthorized classification — never a terminal failure here
// =============================================================

#[test]
fn unauthorized_is_classified_as_unauthorized_not_failed() {
    let resp = interpret_response(401, r#"{"error":"not_authenticated","message":"Please authenticate with Google first"}"#);
    assert_eq!(
        resp,
        SummaryResponse::Unauthorized("Please authenticate with Google first".to_owned())
    );
}

#[test]
fn unauthorized_without_message_uses_auth_fallback() {
    let resp = interpret_response(401, "");
    assert_eq!(resp, SummaryResponse::Unauthorized(AUTH_REQUIRED_FALLBACK.to_owned()));
}

// =============================================================
// Backend failure classification
// =============================================================

#[test]
fn backend_failure_uses_message_verbatim() {
    let resp = interpret_response(500, r#"{"error":"error","message":"Gmail API quota exceeded"}"#);
    assert_eq!(resp, SummaryResponse::Failed("Gmail API quota exceeded".to_owned()));
}

#[test]
fn backend_failure_without_body_uses_generic_fallback() {
    let resp = interpret_response(502, "");
    assert_eq!(resp, SummaryResponse::Failed(GENERIC_FETCH_ERROR.to_owned()));
}

#[test]
fn backend_failure_with_blank_message_uses_generic_fallback() {
    let resp = interpret_response(500, r#"{"message":"   "}"#);
    assert_eq!(resp, SummaryResponse::Failed(GENERIC_FETCH_ERROR.to_owned()));
}
