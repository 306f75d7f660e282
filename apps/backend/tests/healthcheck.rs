mod common;
mod support;

use actix_web::test;
use backend::domain::Move;
use backend::routes::health::HealthResponse;
use backend::state::app_state::AppState;
use support::{create_test_app, memory_state};

#[actix_web::test]
async fn health_reports_db_and_migrations() {
    let app = create_test_app(memory_state(vec![Move::Rock]).await).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: HealthResponse = common::read_ok_json(test::call_service(&app, req).await).await;

    assert_eq!(health.status, "ok");
    assert_eq!(health.db, "ok");
    assert!(health.db_error.is_none());
    assert_eq!(health.migrations, "m20251019_000001_create_players_and_games");
    assert_eq!(health.app_version, env!("CARGO_PKG_VERSION"));
    assert!(time::OffsetDateTime::parse(
        &health.time,
        &time::format_description::well_known::Rfc3339
    )
    .is_ok());
}

#[actix_web::test]
async fn health_without_db_is_still_up() {
    let app = create_test_app(AppState::default()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: HealthResponse = common::read_ok_json(test::call_service(&app, req).await).await;

    assert_eq!(health.status, "ok");
    assert_eq!(health.db, "error");
    assert_eq!(health.db_error.as_deref(), Some("Database unavailable"));
}
