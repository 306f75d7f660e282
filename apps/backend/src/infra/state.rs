use std::sync::Arc;

use crate::config::db::DbConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::move_source::{MoveSource, RandomMoveSource};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_config: Option<DbConfig>,
    moves: Option<Arc<dyn MoveSource>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_config: None,
            moves: None,
        }
    }

    pub fn with_db(mut self, config: DbConfig) -> Self {
        self.db_config = Some(config);
        self
    }

    pub fn with_move_source(mut self, moves: Arc<dyn MoveSource>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Connects and migrates when a database was configured. Without a move
    /// source the cpu plays uniformly at random from OS entropy.
    pub async fn build(self) -> Result<AppState, AppError> {
        let moves = self
            .moves
            .unwrap_or_else(|| Arc::new(RandomMoveSource::default()));

        match self.db_config {
            Some(config) => {
                let conn = bootstrap_db(&config).await?;
                Ok(AppState::new(conn, moves))
            }
            None => Ok(AppState::without_db(moves)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
