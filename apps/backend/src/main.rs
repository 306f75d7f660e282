use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::config::db::DbConfig;
use backend::config::server::ServerConfig;
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger};
use backend::routes;
use backend::services::move_source::RandomMoveSource;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server_cfg = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };
    let db_cfg = match DbConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(db_cfg)
        .with_move_source(Arc::new(RandomMoveSource::new(server_cfg.cpu_seed)))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %server_cfg.host,
        port = server_cfg.port,
        seeded_cpu = server_cfg.cpu_seed.is_some(),
        "starting jokenpo backend"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}
