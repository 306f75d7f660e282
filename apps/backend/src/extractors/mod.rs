pub mod player_id;
pub mod validated_json;

pub use player_id::PlayerIdPath;
pub use validated_json::ValidatedJson;
