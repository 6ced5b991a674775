//! When a round and when the whole game are over.
//!
//! The state machine asks an `EndConditions` implementation at the end of
//! every turn and every round. Scoring is left to the caller.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::config::GameConfig;
use crate::game::Round;

/// Why a round stopped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnding {
    /// A tunnel touches these goal cells.
    GoalReached(Vec<Position>),
    /// The deck and every hand are empty.
    Exhausted,
}

/// End-of-round and end-of-game checks.
///
/// ## Implementation Notes
///
/// - `round_ending`: Return None while the round continues
/// - `game_over`: `rounds_played` counts rounds that reached `RoundEnd`
pub trait EndConditions {
    /// Check if the round is over.
    fn round_ending(&self, round: &Round) -> Option<RoundEnding>;

    /// Check if no further round should start.
    fn game_over(&self, rounds_played: u32, config: &GameConfig) -> bool;

    fn round_over(&self, round: &Round) -> bool {
        self.round_ending(round).is_some()
    }
}

/// Stock rules: a round ends on the first reached goal or when every card
/// has been played; the game ends after `config.rounds` rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardEndConditions;

impl EndConditions for StandardEndConditions {
    fn round_ending(&self, round: &Round) -> Option<RoundEnding> {
        let reached = round.board().reached_goals();
        if !reached.is_empty() {
            return Some(RoundEnding::GoalReached(reached));
        }
        round.is_exhausted().then_some(RoundEnding::Exhausted)
    }

    fn game_over(&self, rounds_played: u32, config: &GameConfig) -> bool {
        rounds_played >= config.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Connections, PathCard};
    use crate::core::player::Player;
    use crate::core::rng::GameRng;

    fn round() -> Round {
        let players = vec![Player::new("Alice"), Player::new("Bob"), Player::new("Charlie")];
        Round::new(1, players, &GameConfig::default(), &mut GameRng::new(3)).unwrap()
    }

    #[test]
    fn test_fresh_round_continues() {
        assert_eq!(StandardEndConditions.round_ending(&round()), None);
        assert!(!StandardEndConditions.round_over(&round()));
    }

    #[test]
    fn test_goal_reached_ends_round() {
        let mut round = round();
        for column in 1..6 {
            round
                .board_mut()
                .place_card(2, column, PathCard::new("H", Connections::new(0, 1, 0, 1)))
                .unwrap();
        }
        assert_eq!(
            StandardEndConditions.round_ending(&round),
            Some(RoundEnding::GoalReached(vec![(2, 6)]))
        );
    }

    #[test]
    fn test_exhausted_round_ends() {
        let mut round = round();
        round.refill_hand(0, 100);
        for i in 0..3 {
            let ids: Vec<_> = round.players()[i].hand().iter().map(|c| c.id).collect();
            round.discard_cards(i, &ids).unwrap();
        }
        assert_eq!(StandardEndConditions.round_ending(&round), Some(RoundEnding::Exhausted));
    }

    #[test]
    fn test_game_over_after_configured_rounds() {
        let config = GameConfig::default().with_rounds(2);
        assert!(!StandardEndConditions.game_over(0, &config));
        assert!(!StandardEndConditions.game_over(1, &config));
        assert!(StandardEndConditions.game_over(2, &config));
    }
}
