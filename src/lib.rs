//! # rust-saboteur
//!
//! Rules core for a hidden-role tunnel-building card game.
//!
//! ## Design Principles
//!
//! 1. **Event-Driven**: `Game::handle` takes one external event at a time.
//!    Nothing happens between events.
//!
//! 2. **Explicit Configuration**: card, goal and role catalogs live in a
//!    `GameConfig` passed by reference. No global tables.
//!
//! 3. **Reproducible**: every shuffle and draw comes from a seeded
//!    `GameRng`, so one seed replays a whole game.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration
//! - `cards`: tiles, action cards, roles, deck
//! - `board`: the expandable grid and placement legality
//! - `rules`: round and game ending conditions
//! - `game`: phases, events, rounds and the state machine
//! - `error`: the crate error type

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Catalog, GameConfig, GameRng, GameRngState, Player};

pub use crate::cards::{
    ActionCard, Card, CardId, CardKind, Connections, Deck, Direction, PathCard, PathKind, Role, Stance,
};

pub use crate::board::{Board, PlacementRejection, Position};

pub use crate::rules::{EndConditions, RoundEnding, StandardEndConditions};

pub use crate::game::{CardSelection, Game, GameEvent, GamePhase, Round, TurnAction, TurnRecord};

pub use crate::error::{Result, RulesError};
