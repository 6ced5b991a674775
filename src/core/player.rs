//! Players: name, secret role, hand, bench and per-round scores.
//!
//! A player owns its hand and bench. Cards enter a hand by drawing and
//! leave it by discarding or playing; the bench holds action cards other
//! players laid on this one. A player with any offensive card on the
//! bench is blocked and may not lay tunnel tiles.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Deck, Role};
use crate::error::Result;

/// One seat at the table.
///
/// Equality is structural over every field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    /// `None` until the first round deals roles.
    pub role: Option<Role>,
    hand: Vec<Card>,
    bench: Vec<Card>,
    scores: Vec<i32>,
}

impl Player {
    /// A player with no role and empty hand and bench.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_cards(name, None, Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn with_cards(
        name: impl Into<String>,
        role: Option<Role>,
        hand: Vec<Card>,
        bench: Vec<Card>,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            hand,
            bench,
            scores: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn bench(&self) -> &[Card] {
        &self.bench
    }

    #[must_use]
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// Look up a hand card by id.
    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Put a card into the hand.
    pub fn draw(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Draw the top card of `deck` into the hand.
    ///
    /// Fails with `EmptyDeck` and leaves the hand untouched when the deck
    /// is empty.
    pub fn draw_from(&mut self, deck: &mut Deck) -> Result<&Card> {
        let card = deck.draw()?;
        self.hand.push(card);
        Ok(&self.hand[self.hand.len() - 1])
    }

    /// Remove a card from the hand, returning it. `None` if it is not held.
    pub fn discard(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Drop every card in the hand.
    pub fn empty_hand(&mut self) {
        self.hand.clear();
    }

    /// Lay a card on the bench.
    pub fn bench_card(&mut self, card: Card) {
        self.bench.push(card);
    }

    /// Remove the most recently benched offensive card.
    pub fn lift_offensive(&mut self) -> Option<Card> {
        let index = self.bench.iter().rposition(Card::is_offensive)?;
        Some(self.bench.remove(index))
    }

    /// Drop every card on the bench.
    pub fn clear_bench(&mut self) {
        self.bench.clear();
    }

    /// Blocked while any offensive action card sits on the bench.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.bench.iter().any(Card::is_offensive)
    }

    pub fn add_score(&mut self, score: i32) {
        self.scores.push(score);
    }
}
