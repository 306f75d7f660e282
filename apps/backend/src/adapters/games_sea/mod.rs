//! SeaORM adapter for the games (round log) table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, Order,
    PaginatorTrait, QueryFilter, QueryOrder, Set, Statement,
};

use crate::entities::games;

pub mod dto;

pub use dto::{RoundCreate, ScoreboardRow};

/// Per-player WIN/LOSE/DRAW counts over the whole round log.
///
/// LEFT JOIN keeps players without rounds; COALESCE turns their NULL sums into 0.
/// Ordering beyond (wins DESC, losses ASC) falls back to player id for stability.
const SCOREBOARD_SQL: &str = r#"
SELECT
    p.id AS player_id,
    p.name AS name,
    COALESCE(SUM(CASE WHEN g.result = 'WIN' THEN 1 ELSE 0 END), 0) AS wins,
    COALESCE(SUM(CASE WHEN g.result = 'LOSE' THEN 1 ELSE 0 END), 0) AS losses,
    COALESCE(SUM(CASE WHEN g.result = 'DRAW' THEN 1 ELSE 0 END), 0) AS draws
FROM players p
LEFT JOIN games g ON g.player_id = p.id
GROUP BY p.id, p.name
ORDER BY wins DESC, losses ASC, p.id ASC
"#;

/// Insert a round; the timestamp is assigned here, at insert time.
pub async fn insert_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let round = games::ActiveModel {
        id: sea_orm::NotSet,
        player_id: Set(dto.player_id),
        player_move: Set(dto.player_move),
        cpu_move: Set(dto.cpu_move),
        result: Set(dto.result),
        created_at: Set(now),
    };

    round.insert(conn).await
}

/// All rounds for a player, most recent first.
///
/// Recency is the autoincrement id: it follows commit order, while
/// timestamps may tie at clock resolution.
pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::PlayerId.eq(player_id))
        .order_by(games::Column::Id, Order::Desc)
        .all(conn)
        .await
}

pub async fn count_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::PlayerId.eq(player_id))
        .count(conn)
        .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find().count(conn).await
}

/// Live scoreboard aggregate, recomputed on every call.
pub async fn scoreboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ScoreboardRow>, sea_orm::DbErr> {
    let stmt = Statement::from_string(conn.get_database_backend(), SCOREBOARD_SQL.to_string());
    ScoreboardRow::find_by_statement(stmt).all(conn).await
}
