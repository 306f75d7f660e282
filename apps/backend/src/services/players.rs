//! Player registration service.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::errors::domain::DomainError;
use crate::logging::pii::Redacted;
use crate::repos::players::{self, Player};

/// Player domain service bound to one store handle.
pub struct PlayerService<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait + Send + Sync> PlayerService<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// Register a player; the returned name is the trimmed one that was stored.
    pub async fn register_player(&self, raw_name: &str) -> Result<Player, DomainError> {
        let player = players::create_player(self.conn, raw_name).await?;
        info!(player_id = player.id, name = %Redacted(&player.name), "player registered");
        Ok(player)
    }

    pub async fn find_player(&self, player_id: i32) -> Result<Option<Player>, DomainError> {
        players::find_player(self.conn, player_id).await
    }
}
