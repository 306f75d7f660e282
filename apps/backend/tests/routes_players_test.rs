mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::domain::Move;
use backend::routes::players::PlayerOut;
use serde_json::json;
use support::{create_test_app, memory_state, register_player};

#[actix_web::test]
async fn register_returns_id_and_trimmed_name() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({ "name": "  Alice  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));

    let player: PlayerOut = common::read_ok_json(resp).await;
    assert_eq!(player.name, "Alice");
    assert!(player.player_id > 0);
}

#[actix_web::test]
async fn ids_are_distinct() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;

    let a = register_player(&app, "Ana").await;
    let b = register_player(&app, "Bia").await;
    assert_ne!(a, b);
}

#[actix_web::test]
async fn blank_name_is_rejected() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;

    for name in ["", "   ", "\t\n"] {
        let req = test::TestRequest::post()
            .uri("/players")
            .set_json(json!({ "name": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        common::assert_envelope(
            resp,
            StatusCode::BAD_REQUEST,
            "Player name must not be empty.",
        )
        .await;
    }
}

#[actix_web::test]
async fn duplicate_after_trimming_is_rejected() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;
    register_player(&app, " Alice ").await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_envelope(
        resp,
        StatusCode::BAD_REQUEST,
        "The name 'Alice' is already taken. Choose another name.",
    )
    .await;
}

#[actix_web::test]
async fn names_are_case_sensitive() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;

    let upper = register_player(&app, "Alice").await;
    let lower = register_player(&app, "alice").await;
    assert_ne!(upper, lower);
}

#[actix_web::test]
async fn malformed_json_uses_the_envelope() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;

    let req = test::TestRequest::post()
        .uri("/players")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_envelope_contains(resp, StatusCode::BAD_REQUEST, "Invalid JSON").await;
}

#[actix_web::test]
async fn missing_name_field_is_bad_request() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({ "nome": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_envelope_contains(resp, StatusCode::BAD_REQUEST, "missing field `name`").await;
}
