//! DTOs for players_sea adapter.

/// DTO for creating a player. `name` is already trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub name: String,
}
