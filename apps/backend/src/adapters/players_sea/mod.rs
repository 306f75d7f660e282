//! SeaORM adapter for the players table - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::players;

pub mod dto;

pub use dto::PlayerCreate;

// Adapter functions return DbErr; repos layer maps to DomainError.

pub async fn insert_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player = players::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(dto.name),
    };

    player.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

/// Exact, case-sensitive name match.
pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Name.eq(name))
        .one(conn)
        .await
}
