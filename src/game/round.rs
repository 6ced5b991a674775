//! One round: a fresh board, a fresh deck, new roles and new hands.
//!
//! A `Round` owns the players for its lifetime along with the board, the
//! deck and the discard pile. It applies plays but never decides whose
//! turn comes next; the state machine calls `advance_turn`.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::cards::{random_roles, ActionCard, Card, CardId, Deck, Role, Stance};
use crate::core::config::GameConfig;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::error::{Result, RulesError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    number: u32,
    players: Vec<Player>,
    board: Board,
    deck: Deck,
    discard_pile: Vec<Card>,
    current_turn_index: usize,
}

impl Round {
    /// Set up round `number`.
    ///
    /// Lays out the board, builds and shuffles the deck, deals one role
    /// per player, clears every bench, then deals `config.hand_size` cards
    /// to each player from the top of the deck.
    pub fn new(number: u32, mut players: Vec<Player>, config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        if players.is_empty() {
            return Err(RulesError::TooFewPlayers { min: 1, got: 0 });
        }
        config.catalog.validate()?;

        let board = Board::new(&config.catalog, rng);
        let mut deck = Deck::build(config, rng);

        let needed = players.len() * config.hand_size;
        if deck.len() < needed {
            return Err(RulesError::NotEnoughCards {
                requested: needed,
                available: deck.len(),
            });
        }

        let roles = random_roles(&config.catalog.roles, players.len(), rng)?;
        assign_roles(&mut players, roles);
        deal_hands(&mut players, &mut deck, config.hand_size)?;

        log::info!(
            "round {} set up: {} players, {} cards left in deck",
            number,
            players.len(),
            deck.len()
        );

        Ok(Self {
            number,
            players,
            board,
            deck,
            discard_pile: Vec::new(),
            current_turn_index: 0,
        })
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    #[must_use]
    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_turn_index % self.players.len()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index()]
    }

    /// Hand the turn to the next player holding cards, wrapping around.
    /// Players with empty hands are skipped unless nobody holds any.
    pub(crate) fn advance_turn(&mut self) -> usize {
        let count = self.players.len();
        let from = self.current_player_index();
        let next = (1..=count)
            .map(|step| (from + step) % count)
            .find(|&i| !self.players[i].hand().is_empty())
            .unwrap_or((from + 1) % count);
        self.current_turn_index = next;
        next
    }

    /// Whether every card has been drawn and played.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.players.iter().all(|p| p.hand().is_empty())
    }

    /// Draw up to `count` cards into a player's hand, stopping when the
    /// deck runs out. Returns how many were drawn.
    pub fn refill_hand(&mut self, player: usize, count: usize) -> usize {
        let Some(p) = self.players.get_mut(player) else {
            return 0;
        };
        let mut drawn = 0;
        while drawn < count && p.draw_from(&mut self.deck).is_ok() {
            drawn += 1;
        }
        drawn
    }

    /// Lay a path tile from `player`'s hand at (row, column).
    ///
    /// The hand only loses the card when the board accepts it. Board
    /// growth from a one-step-outside target stays either way.
    pub fn place_path(&mut self, player: usize, card: CardId, row: i64, column: i64, flip: bool) -> Result<()> {
        let mut tile = self
            .held(player, card)?
            .as_path()
            .cloned()
            .ok_or_else(|| RulesError::InvalidSelection(format!("{card} is not a path card")))?;
        if flip {
            tile.flip();
        }

        self.board.place_card(row, column, tile)?;
        self.players[player].discard(card);
        Ok(())
    }

    /// Throw away distinct hand cards. All or nothing.
    pub fn discard_cards(&mut self, player: usize, cards: &[CardId]) -> Result<()> {
        if cards.is_empty() {
            return Err(RulesError::InvalidSelection("nothing selected".to_string()));
        }
        for (i, &id) in cards.iter().enumerate() {
            if cards[..i].contains(&id) {
                return Err(RulesError::InvalidSelection(format!("{id} selected twice")));
            }
            self.held(player, id)?;
        }

        let p = &mut self.players[player];
        let removed: Vec<Card> = cards.iter().filter_map(|&id| p.discard(id)).collect();
        self.discard_pile.extend(removed);
        Ok(())
    }

    /// Check that `card` is an action card in `player`'s hand that can be
    /// played on `target`. Changes nothing.
    ///
    /// Without a target, a defensive card still needs some blocked player
    /// at the table to be playable at all.
    pub fn check_action(&self, player: usize, card: CardId, target: Option<usize>) -> Result<&ActionCard> {
        let action = self
            .held(player, card)?
            .as_action()
            .ok_or_else(|| RulesError::InvalidSelection(format!("{card} is not an action card")))?;

        if !action.requires_target() {
            return Ok(action);
        }
        match target {
            Some(target) => {
                let victim = self.players.get(target).ok_or(RulesError::InvalidTarget(target))?;
                if action.is_defensive() && !victim.is_blocked() {
                    return Err(RulesError::InvalidTarget(target));
                }
            }
            None if action.is_defensive() && !self.anyone_blocked() => {
                return Err(RulesError::InvalidSelection(format!("{card} has nothing to repair")));
            }
            None => {}
        }
        Ok(action)
    }

    /// Whether `player` holds an action card with somewhere to go.
    #[must_use]
    pub fn has_playable_action(&self, player: usize) -> bool {
        self.player(player).is_some_and(|p| {
            p.hand()
                .iter()
                .filter_map(Card::as_action)
                .any(|a| !a.is_defensive() || self.anyone_blocked())
        })
    }

    /// Whether any path tile in `player`'s hand, either way up, fits
    /// somewhere on the board.
    #[must_use]
    pub fn has_placeable_path(&self, player: usize) -> bool {
        self.player(player).is_some_and(|p| {
            p.hand().iter().filter_map(Card::as_path).any(|tile| {
                let mut flipped = tile.clone();
                flipped.flip();
                self.board.fits_anywhere(tile) || self.board.fits_anywhere(&flipped)
            })
        })
    }

    fn anyone_blocked(&self) -> bool {
        self.players.iter().any(Player::is_blocked)
    }

    /// Play an action card from `player`'s hand.
    ///
    /// Offensive cards land on the target's bench. A defensive card lifts
    /// the target's latest offensive card and both go to the discard pile.
    /// Neutral cards go straight to the discard pile.
    pub fn play_action(&mut self, player: usize, card: CardId, target: Option<usize>) -> Result<()> {
        let stance = self.check_action(player, card, target)?.stance();
        let target = match (stance, target) {
            (Stance::Neutral, _) => None,
            (_, Some(target)) => Some(target),
            (_, None) => {
                return Err(RulesError::InvalidSelection(format!("{card} needs a target player")));
            }
        };

        let played = self.players[player]
            .discard(card)
            .ok_or(RulesError::CardNotInHand(card))?;
        match (stance, target) {
            (Stance::Offensive, Some(t)) => self.players[t].bench_card(played),
            (Stance::Defensive, Some(t)) => {
                if let Some(lifted) = self.players[t].lift_offensive() {
                    self.discard_pile.push(lifted);
                }
                self.discard_pile.push(played);
            }
            _ => self.discard_pile.push(played),
        }
        Ok(())
    }

    /// Reveal every goal a tunnel has reached. Returns their positions.
    pub fn reveal_reached_goals(&mut self) -> Vec<Position> {
        let reached = self.board.reached_goals();
        for &(row, column) in &reached {
            if let Some(goal) = self.board.reveal_goal(row, column) {
                log::info!("goal at ({row}, {column}) revealed: {}", goal.name());
            }
        }
        reached
    }

    fn held(&self, player: usize, card: CardId) -> Result<&Card> {
        self.players
            .get(player)
            .ok_or(RulesError::InvalidTarget(player))?
            .hand_card(card)
            .ok_or(RulesError::CardNotInHand(card))
    }
}

fn assign_roles(players: &mut [Player], roles: Vec<Role>) {
    for (player, role) in players.iter_mut().zip(roles) {
        log::trace!("{} draws a role", player.name());
        player.role = Some(role);
        player.clear_bench();
    }
}

fn deal_hands(players: &mut [Player], deck: &mut Deck, hand_size: usize) -> Result<()> {
    for player in players.iter_mut() {
        player.empty_hand();
        for _ in 0..hand_size {
            player.draw_from(deck)?;
        }
    }
    Ok(())
}
