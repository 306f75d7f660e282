//! Player registration.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::players::PlayerService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerOut {
    pub player_id: i32,
    pub name: String,
}

/// POST /players
async fn create_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let raw_name = body.into_inner().name;

    let player = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let player = PlayerService::new(txn).register_player(&raw_name).await?;
            Ok(player)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerOut {
        player_id: player.id,
        name: player.name,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_player));
}
