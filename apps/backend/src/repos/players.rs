//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{ConflictKind, DomainError};

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i32,
    pub name: String,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Create a player from a raw name.
///
/// The name is trimmed before validation, storage and comparison. Uniqueness is
/// exact and case-sensitive. The pre-check gives a friendly error; the unique
/// index still decides races, and its violation is reported the same way.
pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    raw_name: &str,
) -> Result<Player, DomainError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(DomainError::invalid_name());
    }

    if players_adapter::find_by_name(conn, name).await?.is_some() {
        return Err(DomainError::duplicate_name(name));
    }

    let dto = players_adapter::PlayerCreate {
        name: name.to_string(),
    };
    match players_adapter::insert_player(conn, dto).await {
        Ok(model) => Ok(Player::from(model)),
        Err(e) => match DomainError::from(e) {
            DomainError::Conflict(ConflictKind::DuplicateName, _) => {
                Err(DomainError::duplicate_name(name))
            }
            other => Err(other),
        },
    }
}

/// Look a player up by id; `Ok(None)` when absent.
pub async fn find_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Option<Player>, DomainError> {
    let model = players_adapter::find_by_id(conn, player_id).await?;
    Ok(model.map(Player::from))
}

/// Like [`find_player`] but absence is `PlayerNotFound`.
pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Player, DomainError> {
    find_player(conn, player_id)
        .await?
        .ok_or_else(|| DomainError::player_not_found(player_id.into()))
}

/// Narrow an externally supplied id to the stored key type. An id the store
/// can never hold names no player, so it is `PlayerNotFound`.
pub fn player_key(player_id: i64) -> Result<i32, DomainError> {
    i32::try_from(player_id).map_err(|_| DomainError::player_not_found(player_id))
}
