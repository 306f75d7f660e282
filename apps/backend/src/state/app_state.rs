use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::move_source::{MoveSource, RandomMoveSource};

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch storage)
    db: Option<DatabaseConnection>,
    /// Source of cpu moves, shared by every worker
    moves: Arc<dyn MoveSource>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, moves: Arc<dyn MoveSource>) -> Self {
        Self {
            db: Some(db),
            moves,
        }
    }

    /// State without a database connection; storage-backed routes answer 503.
    pub fn without_db(moves: Arc<dyn MoveSource>) -> Self {
        Self { db: None, moves }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn moves(&self) -> Arc<dyn MoveSource> {
        Arc::clone(&self.moves)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::without_db(Arc::new(RandomMoveSource::default()))
    }
}
