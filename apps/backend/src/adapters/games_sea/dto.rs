//! DTOs for games_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for recording a round. Labels are canonical (`ROCK`, `WIN`, ...).
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub player_id: i32,
    pub player_move: String,
    pub cpu_move: String,
    pub result: String,
}

/// One aggregated scoreboard row as returned by the grouping query.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ScoreboardRow {
    pub player_id: i32,
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
}
