//! The shared draw pile for one round.
//!
//! Built from the catalog templates, shuffled, then trimmed. Backed by an
//! `im::Vector` so a round can be cloned cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionCard;
use super::card::{Card, CardId};
use super::path::PathCard;
use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::error::{Result, RulesError};

/// An ordered pile of cards. The front is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A deck in exactly the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build the round's deck from the catalog.
    ///
    /// Every path and action template is expanded by its copy count, each
    /// copy gets a fresh `CardId`, the pile is shuffled and then
    /// `config.cards_to_remove` cards are dropped from the top.
    pub fn build(config: &GameConfig, rng: &mut GameRng) -> Self {
        let catalog = &config.catalog;
        let mut next_id = 0u32;
        let mut alloc = || {
            let id = CardId::new(next_id);
            next_id += 1;
            id
        };

        let mut cards = Vec::new();
        for template in &catalog.path_cards {
            for _ in 0..template.number {
                cards.push(Card::path(
                    alloc(),
                    PathCard::new(&template.name, template.connections),
                ));
            }
        }
        for template in &catalog.action_cards {
            for _ in 0..template.number {
                cards.push(Card::action(
                    alloc(),
                    ActionCard::new(&template.name, template.stance),
                ));
            }
        }

        rng.shuffle(&mut cards);
        let removed = config.cards_to_remove.min(cards.len());
        log::debug!(
            "built deck of {} cards ({} removed)",
            cards.len() - removed,
            removed
        );

        Self {
            cards: cards.into_iter().skip(removed).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(RulesError::EmptyDeck)
    }

    /// Remove a specific card wherever it sits.
    pub fn discard(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
