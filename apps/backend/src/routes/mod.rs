use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod jokenpo;
pub mod players;

/// Register every route; shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/players").configure(players::configure_routes))
        .service(web::scope("/jokenpo").configure(jokenpo::configure_routes))
        .default_service(web::to(not_found));
}

/// Unknown paths get the same error envelope as every other failure.
async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
