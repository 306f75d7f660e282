pub mod games;
pub mod move_source;
pub mod players;
