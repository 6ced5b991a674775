//! Core building blocks: players, RNG and configuration.
//!
//! Nothing here knows about phases or turns. The board, deck and round
//! receive a `GameConfig` by reference instead of reading global data.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ActionTemplate, Catalog, GameConfig, GoalTemplate, PathTemplate, RoleTemplate};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
