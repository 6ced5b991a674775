//! Dealt card instances.
//!
//! A `Card` is one physical card in a round: a `CardId` unique within the
//! deck it came from, plus what the card is. Two cards with the same name
//! are still different cards, so hands, benches and the deck track
//! membership by id.

use serde::{Deserialize, Serialize};

use super::action::ActionCard;
use super::path::PathCard;

/// Identifier of a card instance within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Path(PathCard),
    Action(ActionCard),
}

/// A card instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub fn path(id: CardId, card: PathCard) -> Self {
        Self {
            id,
            kind: CardKind::Path(card),
        }
    }

    #[must_use]
    pub fn action(id: CardId, card: ActionCard) -> Self {
        Self {
            id,
            kind: CardKind::Action(card),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match &self.kind {
            CardKind::Path(p) => p.name(),
            CardKind::Action(a) => a.name(),
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&PathCard> {
        match &self.kind {
            CardKind::Path(p) => Some(p),
            CardKind::Action(_) => None,
        }
    }

    #[must_use]
    pub fn as_action(&self) -> Option<&ActionCard> {
        match &self.kind {
            CardKind::Action(a) => Some(a),
            CardKind::Path(_) => None,
        }
    }

    #[must_use]
    pub fn is_path(&self) -> bool {
        matches!(self.kind, CardKind::Path(_))
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.kind, CardKind::Action(_))
    }

    /// Whether this is an offensive action card.
    #[must_use]
    pub fn is_offensive(&self) -> bool {
        self.as_action().is_some_and(ActionCard::is_offensive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Connections, Stance};

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_same_name_different_identity() {
        let a = Card::path(CardId::new(1), PathCard::new("Cross", Connections::ALL_OPEN));
        let b = Card::path(CardId::new(2), PathCard::new("Cross", Connections::ALL_OPEN));
        assert_eq!(a.name(), b.name());
        assert_ne!(a, b);
    }

    #[test]
    fn test_kind_accessors() {
        let tile = Card::path(CardId::new(1), PathCard::new("Straight", Connections::new(1, 0, 1, 0)));
        let block = Card::action(CardId::new(2), ActionCard::new("BROKEN_CART", Stance::Offensive));

        assert!(tile.is_path());
        assert!(tile.as_action().is_none());
        assert!(!tile.is_offensive());

        assert!(block.is_action());
        assert!(block.is_offensive());
        assert_eq!(block.name(), "BROKEN_CART");
        assert!(block.as_path().is_none());
    }
}
