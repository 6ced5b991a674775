//! Action tiles: cards played on players instead of the board.
//!
//! The rules core only knows an action card's stance. What a particular
//! card does beyond blocking or repairing is left to the caller.

use serde::{Deserialize, Serialize};

/// How an action card affects its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Lands on the target's bench and blocks them.
    Offensive,
    /// Lifts one offensive card from the target's bench.
    Defensive,
    /// No target player.
    Neutral,
}

/// A playable action card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCard {
    name: String,
    stance: Stance,
}

impl ActionCard {
    #[must_use]
    pub fn new(name: impl Into<String>, stance: Stance) -> Self {
        Self {
            name: name.into(),
            stance,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn stance(&self) -> Stance {
        self.stance
    }

    #[must_use]
    pub fn is_offensive(&self) -> bool {
        self.stance == Stance::Offensive
    }

    #[must_use]
    pub fn is_defensive(&self) -> bool {
        self.stance == Stance::Defensive
    }

    /// Whether playing this card needs a target player.
    #[must_use]
    pub fn requires_target(&self) -> bool {
        self.stance != Stance::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stance_flags() {
        let map = ActionCard::new("MAP", Stance::Neutral);
        assert!(!map.requires_target());

        let block = ActionCard::new("BROKEN_CART", Stance::Offensive);
        assert!(block.is_offensive());
        assert!(block.requires_target());

        let repair = ActionCard::new("REPAIR_CART", Stance::Defensive);
        assert!(repair.is_defensive());
        assert!(!repair.is_offensive());
        assert!(repair.requires_target());
    }

    #[test]
    fn test_stance_serde() {
        let json = serde_json::to_string(&Stance::Offensive).unwrap();
        assert_eq!(json, "\"offensive\"");
    }
}
