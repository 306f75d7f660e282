//! Gameplay service: one round against the cpu, history and scoreboard.

use std::sync::Arc;

use sea_orm::ConnectionTrait;
use tracing::{debug, error};

use crate::domain::{decide, Move, Outcome};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::games::{self, HistoryEntry, RoundData, ScoreboardEntry};
use crate::repos::players;
use crate::services::move_source::MoveSource;
use crate::trace_ctx;

/// What a finished round reports back to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub player_id: i32,
    pub player_move: Move,
    pub cpu_move: Move,
    pub result: Outcome,
    pub message: String,
}

/// Once both checks have passed, any failure to append the round is ours,
/// never the caller's input.
fn recording_failed(player_id: i32, err: DomainError) -> DomainError {
    match err {
        DomainError::Infra(..) => err,
        other => {
            error!(
                trace_id = %trace_ctx::trace_id(),
                player_id,
                error = %other,
                "failed to record round"
            );
            DomainError::infra(
                InfraErrorKind::Other("RecordRound".into()),
                "Failed to record the round",
            )
        }
    }
}

/// Game domain service bound to one store handle and one move source.
pub struct GameService<'c, C> {
    conn: &'c C,
    moves: Arc<dyn MoveSource>,
}

impl<'c, C: ConnectionTrait + Send + Sync> GameService<'c, C> {
    pub fn new(conn: &'c C, moves: Arc<dyn MoveSource>) -> Self {
        Self { conn, moves }
    }

    /// Play one round.
    ///
    /// The move is validated before the player is looked up, so a bad move for
    /// an unknown player reports `InvalidMove`. Nothing is written unless both
    /// checks pass; a failure while recording is an internal error.
    pub async fn play_round(
        &self,
        player_id: i64,
        raw_move: &str,
    ) -> Result<RoundResult, DomainError> {
        let player_move =
            Move::normalize(raw_move).map_err(|e| DomainError::invalid_move(&e.normalized))?;

        let player_id = players::player_key(player_id)?;
        players::require_player(self.conn, player_id).await?;

        let cpu_move = self.moves.next_move();
        let verdict = decide(player_move, cpu_move);

        let data = RoundData {
            player_id,
            player_move,
            cpu_move,
            result: verdict.result,
        };
        let round = games::record_round(self.conn, data)
            .await
            .map_err(|e| recording_failed(player_id, e))?;

        debug!(
            player_id,
            round_id = round.id,
            player_move = %player_move,
            cpu_move = %cpu_move,
            result = %verdict.result,
            "round recorded"
        );

        Ok(RoundResult {
            player_id,
            player_move,
            cpu_move,
            result: verdict.result,
            message: verdict.message,
        })
    }

    pub async fn get_history(&self, player_id: i64) -> Result<Vec<HistoryEntry>, DomainError> {
        let player_id = players::player_key(player_id)?;
        games::history_for_player(self.conn, player_id).await
    }

    pub async fn get_scoreboard(&self) -> Result<Vec<ScoreboardEntry>, DomainError> {
        games::scoreboard(self.conn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_while_recording_become_internal() {
        for err in [
            DomainError::player_not_found(7),
            DomainError::invalid_move("ROCK"),
            DomainError::duplicate_name("Alice"),
        ] {
            let mapped = recording_failed(7, err);
            assert_eq!(
                mapped,
                DomainError::infra(
                    InfraErrorKind::Other("RecordRound".into()),
                    "Failed to record the round"
                )
            );
        }
    }

    #[test]
    fn infra_errors_while_recording_pass_through() {
        let err = DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
        assert_eq!(recording_failed(7, err.clone()), err);
    }
}
