//! Game flow: phases, turn inputs, rounds and the state machine.
//!
//! ## Key Types
//!
//! - `GamePhase`: the nine phases and the legal moves between them
//! - `GameEvent` / `TurnAction` / `CardSelection`: external inputs
//! - `Round`: one board, deck and deal
//! - `Game`: the event-driven state machine
//! - `TurnRecord`: history entry for a completed turn

pub mod machine;
pub mod phase;
pub mod round;
pub mod turn;

pub use machine::Game;
pub use phase::GamePhase;
pub use round::Round;
pub use turn::{CardSelection, GameEvent, TurnAction, TurnRecord};
