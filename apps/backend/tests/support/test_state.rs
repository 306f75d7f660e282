use std::sync::Arc;

use backend::config::db::DbConfig;
use backend::domain::Move;
use backend::infra::state::build_state;
use backend::services::move_source::{MoveSource, ScriptedMoveSource};
use backend::state::app_state::AppState;

/// Fresh, migrated in-memory database with a cpu that replays `script`.
pub async fn memory_state(script: Vec<Move>) -> AppState {
    memory_state_with(Arc::new(ScriptedMoveSource::new(script))).await
}

pub async fn memory_state_with(moves: Arc<dyn MoveSource>) -> AppState {
    build_state()
        .with_db(DbConfig::sqlite_memory())
        .with_move_source(moves)
        .build()
        .await
        .expect("in-memory state should build")
}
