//! Top-level game phases and the legal moves between them.

use serde::{Deserialize, Serialize};

/// Where the game currently is.
///
/// ```text
/// NamingPlayers -> RoundBegin -> PlayerTurnBegin -> ChoseAction -> ChoseCards
///     -> [ChosePlayer] -> PlayerTurnEnd -> (PlayerTurnBegin | RoundEnd)
///     -> (RoundBegin | GameEnd)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NamingPlayers,
    RoundBegin,
    PlayerTurnBegin,
    ChoseAction,
    ChoseCards,
    ChosePlayer,
    PlayerTurnEnd,
    RoundEnd,
    GameEnd,
}

impl GamePhase {
    /// Phases reachable in one step.
    #[must_use]
    pub fn successors(self) -> &'static [GamePhase] {
        use GamePhase::*;
        match self {
            NamingPlayers => &[RoundBegin],
            RoundBegin => &[PlayerTurnBegin],
            PlayerTurnBegin => &[ChoseAction],
            ChoseAction => &[ChoseCards],
            ChoseCards => &[ChosePlayer, PlayerTurnEnd],
            ChosePlayer => &[PlayerTurnEnd],
            PlayerTurnEnd => &[RoundEnd, PlayerTurnBegin],
            RoundEnd => &[GameEnd, RoundBegin],
            GameEnd => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: GamePhase) -> bool {
        self.successors().contains(&next)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == GamePhase::GameEnd
    }
}
