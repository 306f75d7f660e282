#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_envelope::{
    assert_error_envelope_contains, assert_error_envelope_from_parts,
};
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a 200 and decode the JSON body.
pub async fn read_ok_json<T: DeserializeOwned>(resp: ServiceResponse<BoxBody>) -> T {
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        StatusCode::OK,
        "expected 200, got {status} with body {}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).expect("response body should decode")
}

/// Assert the full error envelope, message included.
pub async fn assert_envelope(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    assert_error_envelope_from_parts(status, &headers, &body, expected_status, expected_error);
}

/// Assert the envelope shape, matching only part of the message.
pub async fn assert_envelope_contains(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    fragment: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    assert_error_envelope_contains(status, &headers, &body, expected_status, fragment);
}
