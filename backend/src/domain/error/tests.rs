//! Tests for domain error construction and trace propagation.

use super::*;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> DomainError {
    DomainError::invalid_request("bad")
}

#[rstest]
#[case(DomainError::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(DomainError::unauthorized("x"), ErrorCode::Unauthorized)]
#[case(DomainError::not_found("x"), ErrorCode::NotFound)]
#[case(DomainError::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(DomainError::internal("x"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: DomainError, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = DomainError::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_substitutes_default_message_for_blank_input() {
    let error = DomainError::new(ErrorCode::NotFound, "");
    assert_eq!(error.message(), "not found");
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = DomainError::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { DomainError::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn display_uses_message(base_error: DomainError) {
    assert_eq!(base_error.to_string(), "bad");
}
