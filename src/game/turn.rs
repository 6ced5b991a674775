//! Turn inputs: the action a player picks, the cards they select, the
//! events that drive the state machine, and the record of a finished turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// What a player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Lay one path tile on the board.
    PlacePath,
    /// Play one action card, possibly on another player.
    PlayAction,
    /// Throw away one or more hand cards.
    Discard,
}

/// The cards (and, for path tiles, the target cell) picked in `ChoseCards`.
///
/// SmallVec keeps the usual one-card selection off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSelection {
    pub cards: SmallVec<[CardId; 3]>,
    /// Target cell for a path tile. May be one step outside the board.
    pub position: Option<(i64, i64)>,
    /// Turn the tile 180 degrees before placing it.
    pub flip: bool,
}

impl CardSelection {
    /// Select a single card.
    #[must_use]
    pub fn card(id: CardId) -> Self {
        Self {
            cards: SmallVec::from_slice(&[id]),
            ..Self::default()
        }
    }

    /// Select several cards.
    #[must_use]
    pub fn cards(ids: &[CardId]) -> Self {
        Self {
            cards: SmallVec::from_slice(ids),
            ..Self::default()
        }
    }

    /// Select a path tile to lay at (row, column).
    #[must_use]
    pub fn place(id: CardId, row: i64, column: i64) -> Self {
        Self {
            position: Some((row, column)),
            ..Self::card(id)
        }
    }

    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip = true;
        self
    }
}

/// One external input to the state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RegisterPlayers(Vec<String>),
    StartRound,
    BeginTurn,
    ChooseAction(TurnAction),
    SelectCards(CardSelection),
    ChoosePlayer(usize),
    EndTurn,
    EndRound,
}

impl GameEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::RegisterPlayers(_) => "RegisterPlayers",
            GameEvent::StartRound => "StartRound",
            GameEvent::BeginTurn => "BeginTurn",
            GameEvent::ChooseAction(_) => "ChooseAction",
            GameEvent::SelectCards(_) => "SelectCards",
            GameEvent::ChoosePlayer(_) => "ChoosePlayer",
            GameEvent::EndTurn => "EndTurn",
            GameEvent::EndRound => "EndRound",
        }
    }
}

/// A completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round number, starting at 1.
    pub round: u32,
    /// Index of the acting player.
    pub player: usize,
    pub action: TurnAction,
    pub cards: SmallVec<[CardId; 3]>,
    pub position: Option<(i64, i64)>,
    pub target: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_builders() {
        let single = CardSelection::card(CardId::new(4));
        assert_eq!(single.cards.as_slice(), &[CardId::new(4)]);
        assert!(single.position.is_none());

        let place = CardSelection::place(CardId::new(1), -1, 3).flipped();
        assert_eq!(place.position, Some((-1, 3)));
        assert!(place.flip);

        let many = CardSelection::cards(&[CardId::new(1), CardId::new(2)]);
        assert_eq!(many.cards.len(), 2);
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::SelectCards(CardSelection::place(CardId::new(3), 2, 1));
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.name(), "SelectCards");
    }
}
