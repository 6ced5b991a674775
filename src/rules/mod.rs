//! Round and game ending conditions.
//!
//! The `Game` state machine calls into `EndConditions` but never decides
//! on its own when a round or the game is over.

pub mod conditions;

pub use conditions::{EndConditions, RoundEnding, StandardEndConditions};
