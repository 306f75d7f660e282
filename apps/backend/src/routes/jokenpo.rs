//! Gameplay routes: play a round, read history, read the scoreboard.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::{Move, Outcome};
use crate::error::AppError;
use crate::extractors::{PlayerIdPath, ValidatedJson};
use crate::repos::games::{HistoryEntry, ScoreboardEntry};
use crate::services::games::{GameService, RoundResult};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub player_id: i64,
    #[serde(rename = "move")]
    pub player_move: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResultOut {
    pub player_id: i32,
    pub player_move: Move,
    pub cpu_move: Move,
    pub result: Outcome,
    pub message: String,
}

impl From<RoundResult> for GameResultOut {
    fn from(r: RoundResult) -> Self {
        Self {
            player_id: r.player_id,
            player_move: r.player_move,
            cpu_move: r.cpu_move,
            result: r.result,
            message: r.message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntryOut {
    pub player_move: Move,
    pub cpu_move: Move,
    pub result: Outcome,
}

impl From<HistoryEntry> for HistoryEntryOut {
    fn from(e: HistoryEntry) -> Self {
        Self {
            player_move: e.player_move,
            cpu_move: e.cpu_move,
            result: e.result,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreboardEntryOut {
    pub name: String,
    pub player_id: i32,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl From<ScoreboardEntry> for ScoreboardEntryOut {
    fn from(e: ScoreboardEntry) -> Self {
        Self {
            name: e.name,
            player_id: e.player_id,
            wins: e.wins,
            losses: e.losses,
            draws: e.draws,
        }
    }
}

/// POST /jokenpo/play
async fn play(
    app_state: web::Data<AppState>,
    body: ValidatedJson<PlayRequest>,
) -> Result<HttpResponse, AppError> {
    let PlayRequest {
        player_id,
        player_move,
    } = body.into_inner();
    let moves = app_state.moves();

    let round = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let round = GameService::new(txn, moves)
                .play_round(player_id, &player_move)
                .await?;
            Ok(round)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameResultOut::from(round)))
}

/// GET /jokenpo/history/{player_id}
async fn history(
    app_state: web::Data<AppState>,
    player_id: PlayerIdPath,
) -> Result<HttpResponse, AppError> {
    let PlayerIdPath(player_id) = player_id;
    let moves = app_state.moves();

    let entries = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let entries = GameService::new(txn, moves).get_history(player_id).await?;
            Ok(entries)
        })
    })
    .await?;

    let out: Vec<HistoryEntryOut> = entries.into_iter().map(HistoryEntryOut::from).collect();
    Ok(HttpResponse::Ok().json(out))
}

/// GET /jokenpo/scoreboard
async fn scoreboard(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let moves = app_state.moves();

    let entries = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let entries = GameService::new(txn, moves).get_scoreboard().await?;
            Ok(entries)
        })
    })
    .await?;

    let out: Vec<ScoreboardEntryOut> = entries
        .into_iter()
        .map(ScoreboardEntryOut::from)
        .collect();
    Ok(HttpResponse::Ok().json(out))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/play", web::post().to(play))
        .route("/history/{player_id}", web::get().to(history))
        .route("/scoreboard", web::get().to(scoreboard));
}
