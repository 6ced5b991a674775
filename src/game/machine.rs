//! The top-level game state machine.
//!
//! `Game` moves through [`GamePhase`]s one external event at a time. Every
//! handler checks the current phase first and refuses out-of-order events
//! with [`RulesError::InvalidTransition`] before touching anything, so a
//! rejected event leaves the phase, the round and the roster as they were.
//!
//! The one exception is board growth: a tile aimed one step outside the
//! grid grows it even when the tile itself is then refused.

use rustc_hash::FxHashSet;

use super::phase::GamePhase;
use super::round::Round;
use super::turn::{CardSelection, GameEvent, TurnAction, TurnRecord};
use crate::cards::CardId;
use crate::core::config::GameConfig;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::error::{Result, RulesError};
use crate::rules::{EndConditions, RoundEnding, StandardEndConditions};

/// The action picked this turn and, once made, the card selection waiting
/// for a target player.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingTurn {
    action: TurnAction,
    selection: Option<CardSelection>,
}

/// A whole game: roster, rounds, and the phase machine driving them.
#[derive(Clone, Debug)]
pub struct Game<R: EndConditions = StandardEndConditions> {
    config: GameConfig,
    rules: R,
    rng: GameRng,
    players: Vec<Player>,
    current_round: Option<Round>,
    state: GamePhase,
    rounds_played: u32,
    pending: Option<PendingTurn>,
    last_round_ending: Option<RoundEnding>,
    history: im::Vector<TurnRecord>,
}

impl Game {
    /// A game waiting for player names, using the stock end conditions.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        Self::with_rules(config, rng, StandardEndConditions)
    }
}

impl<R: EndConditions> Game<R> {
    #[must_use]
    pub fn with_rules(config: GameConfig, rng: GameRng, rules: R) -> Self {
        Self {
            config,
            rules,
            rng,
            players: Vec::new(),
            current_round: None,
            state: GamePhase::NamingPlayers,
            rounds_played: 0,
            pending: None,
            last_round_ending: None,
            history: im::Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> GamePhase {
        self.state
    }

    /// The players as they stand right now: the round's copies while a
    /// round is running, the roster otherwise.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        match &self.current_round {
            Some(round) if self.state != GamePhase::RoundBegin => round.players(),
            _ => &self.players,
        }
    }

    /// The running round, or the last one once it has ended.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The action chosen this turn, if any.
    #[must_use]
    pub fn pending_action(&self) -> Option<TurnAction> {
        self.pending.as_ref().map(|p| p.action)
    }

    #[must_use]
    pub fn last_round_ending(&self) -> Option<&RoundEnding> {
        self.last_round_ending.as_ref()
    }

    /// Every completed turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Feed one event to the machine. Returns the phase it lands in.
    pub fn handle(&mut self, event: GameEvent) -> Result<GamePhase> {
        match event {
            GameEvent::RegisterPlayers(names) => self.register_players(&names),
            GameEvent::StartRound => self.start_round(),
            GameEvent::BeginTurn => self.begin_turn(),
            GameEvent::ChooseAction(action) => self.choose_action(action),
            GameEvent::SelectCards(selection) => self.select_cards(selection),
            GameEvent::ChoosePlayer(target) => self.choose_player(target),
            GameEvent::EndTurn => self.end_turn(),
            GameEvent::EndRound => self.end_round(),
        }
    }

    /// `NamingPlayers -> RoundBegin`.
    ///
    /// Names are trimmed and must be non-empty and unique. The count must
    /// fit the configured range and the role pool.
    pub fn register_players<S: AsRef<str>>(&mut self, names: &[S]) -> Result<GamePhase> {
        self.expect_phase(GamePhase::NamingPlayers, "RegisterPlayers")?;

        let mut seen = FxHashSet::default();
        let mut players = Vec::with_capacity(names.len());
        for raw in names {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return self.reject(RulesError::InvalidName(raw.as_ref().to_string()));
            }
            if !seen.insert(name) {
                return self.reject(RulesError::DuplicateName(name.to_string()));
            }
            players.push(Player::new(name));
        }

        let got = players.len();
        if got < self.config.min_players {
            return self.reject(RulesError::TooFewPlayers {
                min: self.config.min_players,
                got,
            });
        }
        if got > self.config.max_players {
            return self.reject(RulesError::TooManyPlayers {
                max: self.config.max_players,
                got,
            });
        }
        let available = self.config.catalog.role_pool_size();
        if got > available {
            return self.reject(RulesError::NotEnoughRoles { requested: got, available });
        }

        self.players = players;
        Ok(self.transition(GamePhase::RoundBegin))
    }

    /// `RoundBegin -> PlayerTurnBegin`: lay out a new board, deck, roles
    /// and hands. Each round draws from its own forked RNG stream.
    pub fn start_round(&mut self) -> Result<GamePhase> {
        self.expect_phase(GamePhase::RoundBegin, "StartRound")?;

        let mut rng = self.rng.clone();
        let mut round_rng = rng.fork();
        let round = match Round::new(self.rounds_played + 1, self.players.clone(), &self.config, &mut round_rng) {
            Ok(round) => round,
            Err(err) => return self.reject(err),
        };

        self.rng = rng;
        self.current_round = Some(round);
        self.pending = None;
        self.last_round_ending = None;
        Ok(self.transition(GamePhase::PlayerTurnBegin))
    }

    /// `PlayerTurnBegin -> ChoseAction`.
    pub fn begin_turn(&mut self) -> Result<GamePhase> {
        self.expect_phase(GamePhase::PlayerTurnBegin, "BeginTurn")?;
        let round = self.round("BeginTurn")?;
        log::debug!("{} to play", round.current_player().name());

        self.pending = None;
        Ok(self.transition(GamePhase::ChoseAction))
    }

    /// `ChoseAction -> ChoseCards` when the current player can carry the
    /// action out with what they hold.
    pub fn choose_action(&mut self, action: TurnAction) -> Result<GamePhase> {
        self.expect_phase(GamePhase::ChoseAction, "ChooseAction")?;
        let round = self.round("ChooseAction")?;
        let index = round.current_player_index();
        let player = round.current_player();

        let refusal = match action {
            TurnAction::PlacePath if player.is_blocked() => Some("player is blocked"),
            TurnAction::PlacePath if !player.hand().iter().any(|c| c.is_path()) => {
                Some("no path card in hand")
            }
            TurnAction::PlacePath if !round.has_placeable_path(index) => {
                Some("no path card fits the board")
            }
            TurnAction::PlayAction if !player.hand().iter().any(|c| c.is_action()) => {
                Some("no action card in hand")
            }
            TurnAction::PlayAction if !round.has_playable_action(index) => {
                Some("no action card can be played")
            }
            TurnAction::Discard if player.hand().is_empty() => Some("hand is empty"),
            _ => None,
        };
        if let Some(reason) = refusal {
            return self.reject(RulesError::IllegalAction { action, reason });
        }

        self.pending = Some(PendingTurn {
            action,
            selection: None,
        });
        Ok(self.transition(GamePhase::ChoseCards))
    }

    /// `ChoseCards -> PlayerTurnEnd`, or `ChoseCards -> ChosePlayer` for an
    /// action card that needs a target.
    pub fn select_cards(&mut self, selection: CardSelection) -> Result<GamePhase> {
        self.expect_phase(GamePhase::ChoseCards, "SelectCards")?;
        let action = self.pending_turn("SelectCards")?.action;

        let outcome = match action {
            TurnAction::PlacePath => self.apply_place(&selection),
            TurnAction::Discard => self.apply_discard(&selection),
            TurnAction::PlayAction => self.apply_action_card(&selection),
        };
        let next = match outcome {
            Ok(next) => next,
            Err(err) => return self.reject(err),
        };

        if next == GamePhase::ChosePlayer {
            if let Some(pending) = self.pending.as_mut() {
                pending.selection = Some(selection);
            }
        } else {
            self.record_turn(action, &selection, None);
        }
        Ok(self.transition(next))
    }

    /// `ChosePlayer -> PlayerTurnEnd`: play the held action card on
    /// `target`.
    pub fn choose_player(&mut self, target: usize) -> Result<GamePhase> {
        self.expect_phase(GamePhase::ChosePlayer, "ChoosePlayer")?;
        let pending = self.pending_turn("ChoosePlayer")?.clone();
        let Some(selection) = pending.selection else {
            return self.reject(RulesError::InvalidTransition {
                phase: self.state,
                event: "ChoosePlayer",
            });
        };
        let card = single_card(&selection)?;

        let round = self.round_mut("ChoosePlayer")?;
        let player = round.current_player_index();
        if let Err(err) = round.play_action(player, card, Some(target)) {
            return self.reject(err);
        }
        round.refill_hand(player, 1);

        self.record_turn(pending.action, &selection, Some(target));
        Ok(self.transition(GamePhase::PlayerTurnEnd))
    }

    /// `PlayerTurnEnd -> RoundEnd` when the end conditions say so,
    /// otherwise on to the next player.
    ///
    /// Goals a tunnel has reached are turned face up first.
    pub fn end_turn(&mut self) -> Result<GamePhase> {
        self.expect_phase(GamePhase::PlayerTurnEnd, "EndTurn")?;
        let phase = self.state;
        let Some(round) = self.current_round.as_mut() else {
            return Err(RulesError::InvalidTransition { phase, event: "EndTurn" });
        };

        round.reveal_reached_goals();
        self.pending = None;

        if let Some(ending) = self.rules.round_ending(round) {
            log::info!("round {} over: {:?}", round.number(), ending);
            self.players = round.players().to_vec();
            self.rounds_played += 1;
            self.last_round_ending = Some(ending);
            return Ok(self.transition(GamePhase::RoundEnd));
        }

        let next = round.advance_turn();
        log::debug!("turn passes to player {next}");
        Ok(self.transition(GamePhase::PlayerTurnBegin))
    }

    /// `RoundEnd -> GameEnd` once enough rounds are played, otherwise
    /// `RoundEnd -> RoundBegin`.
    pub fn end_round(&mut self) -> Result<GamePhase> {
        self.expect_phase(GamePhase::RoundEnd, "EndRound")?;
        if self.rules.game_over(self.rounds_played, &self.config) {
            log::info!("game over after {} rounds", self.rounds_played);
            return Ok(self.transition(GamePhase::GameEnd));
        }
        Ok(self.transition(GamePhase::RoundBegin))
    }

    fn apply_place(&mut self, selection: &CardSelection) -> Result<GamePhase> {
        let card = single_card(selection)?;
        let (row, column) = selection
            .position
            .ok_or_else(|| RulesError::InvalidSelection("a path tile needs a position".to_string()))?;

        let round = self.round_mut("SelectCards")?;
        let player = round.current_player_index();
        round.place_path(player, card, row, column, selection.flip)?;
        round.refill_hand(player, 1);
        Ok(GamePhase::PlayerTurnEnd)
    }

    fn apply_discard(&mut self, selection: &CardSelection) -> Result<GamePhase> {
        let round = self.round_mut("SelectCards")?;
        let player = round.current_player_index();
        round.discard_cards(player, &selection.cards)?;
        round.refill_hand(player, selection.cards.len());
        Ok(GamePhase::PlayerTurnEnd)
    }

    fn apply_action_card(&mut self, selection: &CardSelection) -> Result<GamePhase> {
        let card = single_card(selection)?;
        let round = self.round_mut("SelectCards")?;
        let player = round.current_player_index();

        if round.check_action(player, card, None)?.requires_target() {
            return Ok(GamePhase::ChosePlayer);
        }
        round.play_action(player, card, None)?;
        round.refill_hand(player, 1);
        Ok(GamePhase::PlayerTurnEnd)
    }

    fn record_turn(&mut self, action: TurnAction, selection: &CardSelection, target: Option<usize>) {
        let Some(round) = self.current_round.as_ref() else {
            return;
        };
        self.history.push_back(TurnRecord {
            round: round.number(),
            player: round.current_player_index(),
            action,
            cards: selection.cards.clone(),
            position: selection.position,
            target,
        });
    }

    fn expect_phase(&self, phase: GamePhase, event: &'static str) -> Result<()> {
        if self.state == phase {
            return Ok(());
        }
        log::debug!("rejected {event} during {:?}", self.state);
        Err(RulesError::InvalidTransition {
            phase: self.state,
            event,
        })
    }

    fn round(&self, event: &'static str) -> Result<&Round> {
        self.current_round.as_ref().ok_or(RulesError::InvalidTransition {
            phase: self.state,
            event,
        })
    }

    fn round_mut(&mut self, event: &'static str) -> Result<&mut Round> {
        let phase = self.state;
        self.current_round
            .as_mut()
            .ok_or(RulesError::InvalidTransition { phase, event })
    }

    fn pending_turn(&self, event: &'static str) -> Result<&PendingTurn> {
        self.pending.as_ref().ok_or(RulesError::InvalidTransition {
            phase: self.state,
            event,
        })
    }

    fn reject<T>(&self, err: RulesError) -> Result<T> {
        log::debug!("rejected during {:?}: {err}", self.state);
        Err(err)
    }

    fn transition(&mut self, next: GamePhase) -> GamePhase {
        debug_assert!(self.state.can_transition_to(next), "{:?} -> {:?}", self.state, next);
        log::info!("{:?} -> {:?}", self.state, next);
        self.state = next;
        next
    }
}

fn single_card(selection: &CardSelection) -> Result<CardId> {
    match selection.cards.as_slice() {
        [card] => Ok(*card),
        cards => Err(RulesError::InvalidSelection(format!(
            "expected one card, got {}",
            cards.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlacementRejection;
    use crate::cards::{ActionCard, Card, Connections, PathCard, Stance};
    use assert_matches::assert_matches;

    fn game() -> Game {
        Game::new(GameConfig::default(), GameRng::new(42))
    }

    fn started() -> Game {
        let mut game = game();
        game.register_players(&["Alice", "Bob", "Charlie"]).unwrap();
        game.start_round().unwrap();
        game
    }

    fn give(game: &mut Game, player: usize, card: Card) {
        game.current_round.as_mut().unwrap().player_mut(player).draw(card);
    }

    #[test]
    fn test_initial_state() {
        let game = game();
        assert_eq!(game.state(), GamePhase::NamingPlayers);
        assert!(game.players().is_empty());
        assert!(game.current_round().is_none());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_register_players() {
        let mut game = game();
        assert_eq!(game.register_players(&[" Alice ", "Bob", "Charlie"]), Ok(GamePhase::RoundBegin));
        let names: Vec<_> = game.players().iter().map(Player::name).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_register_rejections_leave_state() {
        let mut game = game();
        assert_matches!(
            game.register_players(&["Alice", "Bob"]),
            Err(RulesError::TooFewPlayers { min: 3, got: 2 })
        );
        assert_matches!(
            game.register_players(&["Alice", "alice", "Alice"]),
            Err(RulesError::DuplicateName(name)) if name == "Alice"
        );
        assert_matches!(game.register_players(&["Alice", "  ", "Bob"]), Err(RulesError::InvalidName(_)));
        let ten: Vec<String> = (0..10).map(|i| format!("P{i}")).collect();
        assert_matches!(
            game.register_players(&ten),
            Err(RulesError::TooManyPlayers { max: 9, got: 10 })
        );
        assert_eq!(game.state(), GamePhase::NamingPlayers);
        assert!(game.players().is_empty());
    }

    #[test]
    fn test_out_of_order_event() {
        let mut game = game();
        assert_matches!(
            game.handle(GameEvent::SelectCards(CardSelection::default())),
            Err(RulesError::InvalidTransition { phase: GamePhase::NamingPlayers, event: "SelectCards" })
        );
        assert_eq!(game.state(), GamePhase::NamingPlayers);
    }

    #[test]
    fn test_start_round_deals() {
        let game = started();
        assert_eq!(game.state(), GamePhase::PlayerTurnBegin);
        let round = game.current_round().unwrap();
        assert_eq!(round.number(), 1);
        for player in game.players() {
            assert_eq!(player.hand().len(), 6);
            assert!(player.role.is_some());
        }
    }

    #[test]
    fn test_discard_turn() {
        let mut game = started();
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::Discard).unwrap();

        let card = game.players()[0].hand()[0].id;
        let deck_before = game.current_round().unwrap().deck().len();
        assert_eq!(game.select_cards(CardSelection::card(card)), Ok(GamePhase::PlayerTurnEnd));

        let round = game.current_round().unwrap();
        assert_eq!(round.players()[0].hand().len(), 6);
        assert!(round.players()[0].hand_card(card).is_none());
        assert_eq!(round.deck().len(), deck_before - 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].action, TurnAction::Discard);

        assert_eq!(game.end_turn(), Ok(GamePhase::PlayerTurnBegin));
        assert_eq!(game.current_round().unwrap().current_player().name(), "Bob");
    }

    #[test]
    fn test_bad_selection_keeps_phase() {
        let mut game = started();
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::Discard).unwrap();

        assert_matches!(
            game.select_cards(CardSelection::card(CardId::new(9999))),
            Err(RulesError::CardNotInHand(_))
        );
        assert_eq!(game.state(), GamePhase::ChoseCards);
        assert_eq!(game.players()[0].hand().len(), 6);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_illegal_action_choice() {
        let mut game = started();
        game.begin_turn().unwrap();
        let round = game.current_round.as_mut().unwrap();
        let ids: Vec<_> = round.players()[0].hand().iter().map(|c| c.id).collect();
        round.discard_cards(0, &ids).unwrap();

        assert_matches!(
            game.choose_action(TurnAction::Discard),
            Err(RulesError::IllegalAction { action: TurnAction::Discard, .. })
        );
        assert_matches!(
            game.choose_action(TurnAction::PlacePath),
            Err(RulesError::IllegalAction { action: TurnAction::PlacePath, .. })
        );
        assert_eq!(game.state(), GamePhase::ChoseAction);
        assert!(game.pending_action().is_none());
    }

    #[test]
    fn test_round_and_game_end() {
        let mut game = Game::new(GameConfig::default().with_rounds(1), GameRng::new(7));
        game.register_players(&["Alice", "Bob", "Charlie"]).unwrap();
        game.start_round().unwrap();
        let round = game.current_round.as_mut().unwrap();
        for column in 1..6 {
            round
                .board_mut()
                .place_card(2, column, PathCard::new("H", Connections::new(0, 1, 0, 1)))
                .unwrap();
        }

        game.begin_turn().unwrap();
        game.choose_action(TurnAction::Discard).unwrap();
        let card = game.players()[0].hand()[0].id;
        game.select_cards(CardSelection::card(card)).unwrap();

        assert_eq!(game.end_turn(), Ok(GamePhase::RoundEnd));
        assert_eq!(game.rounds_played(), 1);
        assert_matches!(game.last_round_ending(), Some(RoundEnding::GoalReached(_)));
        assert!(game.current_round().unwrap().board().get_card(2, 6).unwrap().is_revealed());

        assert_eq!(game.end_round(), Ok(GamePhase::GameEnd));
        assert!(game.state().is_terminal());
        assert_matches!(game.start_round(), Err(RulesError::InvalidTransition { .. }));
    }

    #[test]
    fn test_neutral_action_skips_target() {
        let mut game = started();
        give(&mut game, 0, Card::action(CardId::new(900), ActionCard::new("MAP", Stance::Neutral)));
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::PlayAction).unwrap();

        assert_eq!(
            game.select_cards(CardSelection::card(CardId::new(900))),
            Ok(GamePhase::PlayerTurnEnd)
        );
        let round = game.current_round().unwrap();
        assert_eq!(round.discard_pile().last().map(|c| c.id), Some(CardId::new(900)));
        assert_eq!(game.history()[0].target, None);
    }

    #[test]
    fn test_offensive_action_targets_player() {
        let mut game = started();
        give(&mut game, 0, Card::action(CardId::new(900), ActionCard::new("BROKEN_LAMP", Stance::Offensive)));
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::PlayAction).unwrap();

        assert_eq!(
            game.select_cards(CardSelection::card(CardId::new(900))),
            Ok(GamePhase::ChosePlayer)
        );
        assert!(game.history().is_empty());

        assert_matches!(game.choose_player(5), Err(RulesError::InvalidTarget(5)));
        assert_eq!(game.state(), GamePhase::ChosePlayer);

        assert_eq!(game.choose_player(1), Ok(GamePhase::PlayerTurnEnd));
        assert!(game.players()[1].is_blocked());
        assert_eq!(game.history()[0].target, Some(1));
        assert_eq!(game.players()[0].hand().len(), 7);

        // Bob is blocked and cannot lay tunnel
        game.end_turn().unwrap();
        game.begin_turn().unwrap();
        assert_matches!(
            game.choose_action(TurnAction::PlacePath),
            Err(RulesError::IllegalAction { reason: "player is blocked", .. })
        );
    }

    #[test]
    fn test_place_path_turn() {
        let mut game = started();
        give(&mut game, 0, Card::path(CardId::new(900), PathCard::new("H", Connections::new(0, 1, 0, 1))));
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::PlacePath).unwrap();

        assert_matches!(
            game.select_cards(CardSelection::card(CardId::new(900))),
            Err(RulesError::InvalidSelection(_))
        );
        assert_matches!(
            game.select_cards(CardSelection::place(CardId::new(900), 0, 3)),
            Err(RulesError::Placement(PlacementRejection::NoAdjacentTile))
        );
        assert_eq!(
            game.select_cards(CardSelection::place(CardId::new(900), 2, 1)),
            Ok(GamePhase::PlayerTurnEnd)
        );
        let round = game.current_round().unwrap();
        assert_eq!(round.board().get_card(2, 1).map(PathCard::name), Some("H"));
        assert_eq!(game.history()[0].position, Some((2, 1)));
    }

    #[test]
    fn test_repair_with_nobody_blocked_stays_in_card_choice() {
        let mut game = started();
        give(&mut game, 0, Card::action(CardId::new(900), ActionCard::new("REPAIR_CART", Stance::Defensive)));
        give(&mut game, 0, Card::action(CardId::new(901), ActionCard::new("MAP", Stance::Neutral)));
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::PlayAction).unwrap();

        assert_matches!(
            game.select_cards(CardSelection::card(CardId::new(900))),
            Err(RulesError::InvalidSelection(_))
        );
        assert_eq!(game.state(), GamePhase::ChoseCards);
        assert!(game.players()[0].hand_card(CardId::new(900)).is_some());
    }

    #[test]
    fn test_only_repairs_in_hand_cannot_pick_action() {
        let mut game = started();
        let round = game.current_round.as_mut().unwrap();
        round.player_mut(0).empty_hand();
        give(&mut game, 0, Card::action(CardId::new(900), ActionCard::new("REPAIR_CART", Stance::Defensive)));
        game.begin_turn().unwrap();

        assert_matches!(
            game.choose_action(TurnAction::PlayAction),
            Err(RulesError::IllegalAction { reason: "no action card can be played", .. })
        );
        assert_eq!(game.state(), GamePhase::ChoseAction);
        assert_eq!(game.choose_action(TurnAction::Discard), Ok(GamePhase::ChoseCards));
    }

    #[test]
    fn test_repair_after_block_reaches_target_choice() {
        let mut game = started();
        let round = game.current_round.as_mut().unwrap();
        round.player_mut(1).bench_card(Card::action(
            CardId::new(800),
            ActionCard::new("BROKEN_CART", Stance::Offensive),
        ));
        give(&mut game, 0, Card::action(CardId::new(900), ActionCard::new("REPAIR_CART", Stance::Defensive)));
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::PlayAction).unwrap();

        assert_eq!(
            game.select_cards(CardSelection::card(CardId::new(900))),
            Ok(GamePhase::ChosePlayer)
        );
        assert_matches!(game.choose_player(2), Err(RulesError::InvalidTarget(2)));
        assert_eq!(game.choose_player(1), Ok(GamePhase::PlayerTurnEnd));
        assert!(!game.players()[1].is_blocked());
    }

    #[test]
    fn test_tile_beside_goal_does_not_end_round() {
        let mut game = started();
        give(&mut game, 0, Card::path(CardId::new(900), PathCard::new("VERTICAL", Connections::new(1, 0, 1, 0))));
        game.begin_turn().unwrap();
        game.choose_action(TurnAction::PlacePath).unwrap();
        game.select_cards(CardSelection::place(CardId::new(900), 1, 6)).unwrap();

        assert_eq!(game.end_turn(), Ok(GamePhase::PlayerTurnBegin));
        assert!(game.last_round_ending().is_none());
        let board = game.current_round().unwrap().board();
        assert!(!board.get_card(0, 6).unwrap().is_revealed());
        assert!(!board.get_card(2, 6).unwrap().is_revealed());
    }

    #[test]
    fn test_unfit_paths_cannot_pick_placement() {
        let mut game = started();
        let round = game.current_round.as_mut().unwrap();
        round.player_mut(0).empty_hand();
        give(&mut game, 0, Card::path(CardId::new(900), PathCard::new("WALL", Connections::CLOSED)));
        game.begin_turn().unwrap();

        assert_matches!(
            game.choose_action(TurnAction::PlacePath),
            Err(RulesError::IllegalAction { reason: "no path card fits the board", .. })
        );
        assert_eq!(game.state(), GamePhase::ChoseAction);
    }

    #[test]
    fn test_invalid_catalog_blocks_round_start() {
        let mut config = GameConfig::default();
        config.catalog.goals.pop();
        let mut game = Game::new(config, GameRng::new(1));
        game.register_players(&["Alice", "Bob", "Charlie"]).unwrap();

        assert_matches!(game.start_round(), Err(RulesError::Catalog(_)));
        assert_eq!(game.state(), GamePhase::RoundBegin);
        assert!(game.current_round().is_none());
    }
}
