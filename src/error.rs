//! Crate error type.

use thiserror::Error;

use crate::board::PlacementRejection;
use crate::cards::CardId;
use crate::game::{GamePhase, TurnAction};

/// Everything the rules core can refuse.
///
/// All variants are local and recoverable: the caller fixes its input and
/// tries again. Nothing here leaves game state half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("Invalid direction '{0}'. Use 'UP', 'DOWN', 'LEFT', or 'RIGHT'.")]
    InvalidDirection(String),

    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    #[error("asked for {requested} roles but the pool holds {available}")]
    NotEnoughRoles { requested: usize, available: usize },

    #[error("dealing needs {requested} cards but the deck holds {available}")]
    NotEnoughCards { requested: usize, available: usize },

    #[error("{0} is not in the player's hand")]
    CardNotInHand(CardId),

    #[error("need at least {min} players, got {got}")]
    TooFewPlayers { min: usize, got: usize },

    #[error("at most {max} players allowed, got {got}")]
    TooManyPlayers { max: usize, got: usize },

    #[error("invalid player name '{0}'")]
    InvalidName(String),

    #[error("player name '{0}' is already taken")]
    DuplicateName(String),

    #[error("{event} is not allowed during {phase:?}")]
    InvalidTransition { phase: GamePhase, event: &'static str },

    #[error("cannot choose {action:?}: {reason}")]
    IllegalAction { action: TurnAction, reason: &'static str },

    #[error("invalid card selection: {0}")]
    InvalidSelection(String),

    #[error("player {0} is not a valid target")]
    InvalidTarget(usize),

    #[error("placement rejected: {0}")]
    Placement(#[from] PlacementRejection),

    #[error("bad catalog: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, RulesError>;
