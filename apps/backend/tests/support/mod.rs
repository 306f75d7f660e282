#![allow(dead_code)]

pub mod app_builder;
pub mod factory;
pub mod test_state;

pub use app_builder::create_test_app;
pub use factory::{play_round, register_player};
pub use test_state::{memory_state, memory_state_with};
