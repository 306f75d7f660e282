//! Assertions for the `{"error": ..., "code": ...}` error envelope.
//!
//! Kept free of backend types so both unit and integration tests can use it.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde_json::Value;

/// Assert that response parts carry the stable error contract:
/// - HTTP status matches `expected_status`
/// - a non-empty `x-trace-id` header is present
/// - the body is exactly `{"error": expected_error, "code": expected_status}`
pub fn assert_error_envelope_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let body: Value = serde_json::from_slice(body_bytes).expect("error body should be JSON");
    let object = body.as_object().expect("error body should be a JSON object");
    assert_eq!(
        object.len(),
        2,
        "error envelope should only carry `error` and `code`, got {body}"
    );
    assert_eq!(body["error"], expected_error);
    assert_eq!(body["code"], expected_status.as_u16());
}

/// Like [`assert_error_envelope_from_parts`] but only checks that the message
/// contains `fragment`. Useful for parser-generated messages.
pub fn assert_error_envelope_contains(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    fragment: &str,
) {
    assert_eq!(status, expected_status, "unexpected HTTP status");
    assert!(
        headers.contains_key("x-trace-id"),
        "x-trace-id header should be present"
    );

    let body: Value = serde_json::from_slice(body_bytes).expect("error body should be JSON");
    let message = body["error"]
        .as_str()
        .expect("`error` field should be a string");
    assert!(
        message.contains(fragment),
        "expected error message to contain {fragment:?}, got {message:?}"
    );
    assert_eq!(body["code"], expected_status.as_u16());
}
