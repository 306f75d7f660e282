//! Round log repository: recording rounds, per-player history and the scoreboard.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::domain::{Move, Outcome};
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::players;

/// A recorded round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRound {
    pub id: i32,
    pub player_id: i32,
    pub player_move: Move,
    pub cpu_move: Move,
    pub result: Outcome,
    pub created_at: OffsetDateTime,
}

/// One line of a player's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub player_move: Move,
    pub cpu_move: Move,
    pub result: Outcome,
}

/// Aggregated tallies for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardEntry {
    pub player_id: i32,
    pub name: String,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

/// Data for recording a round
#[derive(Debug, Clone, Copy)]
pub struct RoundData {
    pub player_id: i32,
    pub player_move: Move,
    pub cpu_move: Move,
    pub result: Outcome,
}

fn corrupt(what: &str, raw: &str) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("Stored {what} '{raw}' is not recognized"),
    )
}

fn decode_move(raw: &str) -> Result<Move, DomainError> {
    raw.parse::<Move>().map_err(|_| corrupt("move", raw))
}

fn decode_outcome(raw: &str) -> Result<Outcome, DomainError> {
    raw.parse::<Outcome>().map_err(|_| corrupt("result", raw))
}

fn count(raw: i64) -> Result<u64, DomainError> {
    u64::try_from(raw).map_err(|_| corrupt("tally", &raw.to_string()))
}

impl TryFrom<games::Model> for GameRound {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            player_id: model.player_id,
            player_move: decode_move(&model.player_move)?,
            cpu_move: decode_move(&model.cpu_move)?,
            result: decode_outcome(&model.result)?,
            created_at: model.created_at,
        })
    }
}

impl From<GameRound> for HistoryEntry {
    fn from(round: GameRound) -> Self {
        Self {
            player_move: round.player_move,
            cpu_move: round.cpu_move,
            result: round.result,
        }
    }
}

/// Append a round. Fails with `PlayerNotFound` when the player does not exist.
pub async fn record_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    data: RoundData,
) -> Result<GameRound, DomainError> {
    players::require_player(conn, data.player_id).await?;

    let dto = games_adapter::RoundCreate {
        player_id: data.player_id,
        player_move: data.player_move.as_str().to_string(),
        cpu_move: data.cpu_move.as_str().to_string(),
        result: data.result.as_str().to_string(),
    };
    let model = games_adapter::insert_round(conn, dto).await?;
    GameRound::try_from(model)
}

/// Every round of a player, most recent first. `PlayerNotFound` when the
/// player does not exist; an existing player without rounds gets `[]`.
pub async fn history_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Vec<HistoryEntry>, DomainError> {
    players::require_player(conn, player_id).await?;

    games_adapter::find_by_player(conn, player_id)
        .await?
        .into_iter()
        .map(|m| GameRound::try_from(m).map(HistoryEntry::from))
        .collect()
}

/// Per-player tallies; every registered player appears, rounds or not.
/// Sorted by wins descending, then losses ascending, then player id.
pub async fn scoreboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ScoreboardEntry>, DomainError> {
    games_adapter::scoreboard(conn)
        .await?
        .into_iter()
        .map(|row| {
            Ok(ScoreboardEntry {
                player_id: row.player_id,
                name: row.name,
                wins: count(row.wins)?,
                losses: count(row.losses)?,
                draws: count(row.draws)?,
            })
        })
        .collect()
}
