mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::state::app_state::AppState;
use support::{create_test_app, play_round};

#[actix_web::test]
async fn unknown_route_uses_the_envelope() {
    let app = create_test_app(AppState::default()).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    common::assert_envelope(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "No route for GET /nope",
    )
    .await;
}

#[actix_web::test]
async fn missing_database_is_service_unavailable() {
    let app = create_test_app(AppState::default()).await;

    common::assert_envelope(
        play_round(&app, 1, "ROCK").await,
        StatusCode::SERVICE_UNAVAILABLE,
        "Database unavailable",
    )
    .await;
}

#[actix_web::test]
async fn trace_id_header_matches_request_id() {
    let app = create_test_app(AppState::default()).await;

    let req = test::TestRequest::get().uri("/jokenpo/scoreboard").to_request();
    let resp = test::call_service(&app, req).await;
    let trace = resp.headers().get("x-trace-id").cloned().expect("x-trace-id");
    let request = resp.headers().get("x-request-id").cloned().expect("x-request-id");
    assert_eq!(trace, request);
}
