use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

/// Liveness plus a best-effort database probe. Always 200; a broken store
/// shows up as `db: "error"` with a sanitized `db_error`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub app_version: String,
    pub db: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_error: Option<String>,
    pub migrations: String,
    pub time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, migrations) = match require_db(&app_state) {
        Ok(conn) => match conn.ping().await {
            Ok(()) => {
                let migrations = match get_latest_migration_version(conn).await {
                    Ok(Some(version)) => version,
                    Ok(None) => "no_migrations".to_string(),
                    Err(_) => "unknown".to_string(),
                };
                ("ok".to_string(), None, migrations)
            }
            Err(e) => (
                "error".to_string(),
                Some(format!("DB query failed: {}", Redacted(&e.to_string()))),
                "unknown".to_string(),
            ),
        },
        Err(e) => (
            "error".to_string(),
            Some(e.detail().to_string()),
            "unknown".to_string(),
        ),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version,
        db,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
