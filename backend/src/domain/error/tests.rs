//! Tests for domain error construction and the wire envelope.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_substitutes_blank_messages() {
    let error = Error::new(ErrorCode::InternalError, "");
    assert_eq!(error.message(), "unspecified error");
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::not_found("User not found") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_detail_and_context(expected_trace_id: String) {
    let error = Error::invalid_request("name must not be empty")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "name" }));

    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "detail": "name must not be empty",
            "traceId": expected_trace_id,
            "context": { "field": "name" },
        })
    );
}

#[rstest]
fn omits_absent_optional_fields() {
    let value = serde_json::to_value(Error::not_found("User not found")).expect("serialises");

    assert_eq!(
        value,
        json!({ "code": "not_found", "detail": "User not found" })
    );
}

#[rstest]
#[case(json!({ "code": "not_found", "detail": "  " }), ErrorValidationError::EmptyMessage)]
#[case(
    json!({ "code": "not_found", "detail": "missing", "traceId": " " }),
    ErrorValidationError::EmptyTraceId
)]
fn deserialisation_enforces_invariants(
    #[case] payload: serde_json::Value,
    #[case] expected: ErrorValidationError,
) {
    let err = serde_json::from_value::<Error>(payload).expect_err("payload is invalid");
    assert!(
        err.to_string().contains(&expected.to_string()),
        "unexpected error: {err}"
    );
}

#[rstest]
fn deserialisation_accepts_snake_case_trace_alias(expected_trace_id: String) {
    let error: Error = serde_json::from_value(json!({
        "code": "internal_error",
        "detail": "boom",
        "trace_id": expected_trace_id,
    }))
    .expect("alias accepted");

    assert_eq!(error.trace_id(), Some(TRACE_ID));
}
