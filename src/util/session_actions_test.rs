use super::*;

fn unauthorized() -> Result<SummaryResponse, String> {
    Ok(SummaryResponse::Unauthorized(
        "Please authenticate with Google first".to_owned(),
    ))
}

// =============================================================
// decide: success and failure mapping
// =============================================================

#[test]
fn success_stores_summary_text() {
    let result = Ok(SummaryResponse::Summary("Hello".to_owned()));
    assert_eq!(decide(result, false), Decision::Store("Hello".to_owned()));
}

#[test]
fn backend_failure_carries_message_verbatim() {
    let result = Ok(SummaryResponse::Failed("Gmail API quota exceeded".to_owned()));
    assert_eq!(
        decide(result, false),
        Decision::Fail(SessionError::new(ErrorKind::Backend, "Gmail API quota exceeded"))
    );
}

#[test]
fn transport_failure_forwards_error_text() {
    let result = Err("fetch failed".to_owned());
    assert_eq!(
        decide(result, false),
        Decision::Fail(SessionError::new(ErrorKind::Transport, "fetch failed"))
    );
}

// =============================================================
// decide: the single-auth-round retry cap
// =============================================================

#[test]
fn first_unauthorized_begins_auth_never_fails() {
    assert_eq!(decide(unauthorized(), false), Decision::BeginAuth);
}

#[test]
fn unauthorized_after_auth_round_fails_with_auth_required() {
    assert_eq!(
        decide(unauthorized(), true),
        Decision::Fail(SessionError::new(
            ErrorKind::AuthRequired,
            "Please authenticate with Google first"
        ))
    );
}

#[test]
fn auth_then_success_sequence_ends_with_stored_summary() {
    // click → 401 → auth round → retry → 200 {summary:"Hello"}
    assert_eq!(decide(unauthorized(), false), Decision::BeginAuth);
    let retry = Ok(SummaryResponse::Summary("Hello".to_owned()));
    assert_eq!(decide(retry, true), Decision::Store("Hello".to_owned()));
}

// =============================================================
// next_phase: cancelled watches write no state
// =============================================================

#[test]
fn cancelled_watch_yields_no_phase_write() {
    assert_eq!(next_phase(true, Decision::Store("Hello".to_owned())), None);
    assert_eq!(next_phase(true, Decision::BeginAuth), None);
    assert_eq!(
        next_phase(true, Decision::Fail(SessionError::new(ErrorKind::Transport, "fetch failed"))),
        None
    );
}

#[test]
fn settled_decisions_map_to_their_phases() {
    assert_eq!(
        next_phase(false, Decision::Store("Hello".to_owned())),
        Some(SessionPhase::Ready("Hello".to_owned()))
    );
    assert_eq!(next_phase(false, Decision::BeginAuth), Some(SessionPhase::Authenticating));

    let err = SessionError::new(ErrorKind::Backend, "boom");
    assert_eq!(
        next_phase(false, Decision::Fail(err.clone())),
        Some(SessionPhase::Failed(err))
    );
}

// =============================================================
// request_summary: state-layer re-entrancy guard
// =============================================================

#[test]
fn request_is_ignored_while_busy() {
    let session = RwSignal::new(SessionPhase::Loading);
    let watch = StoredValue::new(WatchHandle::default());
    let before = watch.get_value();

    request_summary(session, watch);

    // Neither the phase nor the watch handle was touched.
    assert_eq!(session.get_untracked(), SessionPhase::Loading);
    assert!(!before.is_cancelled());
}

#[test]
fn request_supersedes_previous_watch_handle() {
    let session = RwSignal::new(SessionPhase::Idle);
    let watch = StoredValue::new(WatchHandle::default());
    let old = watch.get_value();

    request_summary(session, watch);

    assert!(old.is_cancelled());
    assert!(!watch.get_value().is_cancelled());
}

#[test]
fn request_sets_loading_before_any_task_runs() {
    let session = RwSignal::new(SessionPhase::Idle);
    let watch = StoredValue::new(WatchHandle::default());

    request_summary(session, watch);

    // Synchronous write: the busy guard holds from the moment the call
    // returns, not from whenever the spawned task first runs.
    assert_eq!(session.get_untracked(), SessionPhase::Loading);
}
