//! The match engine.
//!
//! `Game` owns every card location and drives the turn machine. The host
//! answers one question at a time through [`Game::action`] (or
//! [`Game::try_action`] for the rejection reason) and reads state through
//! the query methods.
//!
//! ## Transitions
//!
//! Accepted actions either resolve on the spot or move the machine into a
//! transient status (`AnsweredPresident`, `AnsweredCardToThrow`). The
//! private `advance` loop runs transient statuses until the next question
//! or a terminal status, so hosts only ever observe `Ask*`, `Done` or
//! `Draw`.
//!
//! ```
//! use gostop::core::{GameConfig, GameStatus};
//! use gostop::game::Game;
//!
//! let mut game = Game::new(GameConfig::new(2), 7);
//! assert_eq!(game.status(), GameStatus::AskCardToThrow);
//!
//! let action = game.legal_actions()[0];
//! assert!(game.action(action));
//! assert!(game.check_invariants().is_ok());
//! ```

use im::Vector;
use tracing::{debug, trace};

use super::deal::Deal;
use super::player::Player;
use super::turn::TurnContext;
use crate::cards::{shuffled_deck, Card};
use crate::core::{
    Action, ActionError, ActionRecord, CaptureChoice, DealError, GameConfig, GameEvent,
    GameRng, GameSnapshot, GameStatus, InvariantViolation, Pending, PlayerId,
    PlayerMap,
};
use crate::zones::{Board, Stock};

/// One match of Go-Stop.
///
/// Cloning is cheap: hands, captures, the stock and the history are
/// persistent collections.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    /// Seed the deal was shuffled from.
    pub(super) seed: u64,
    pub(super) players: PlayerMap<Player>,
    pub(super) board: Board,
    pub(super) stock: Stock,
    pub(super) status: GameStatus,
    pub(super) turn: PlayerId,
    pub(super) round: u32,
    pub(super) pending: Option<Pending>,
    pub(super) winner: Option<PlayerId>,
    /// Next seat the president scan looks at.
    pub(super) president_cursor: usize,
    pub(super) ctx: TurnContext,
    pub(super) history: Vector<ActionRecord>,
    pub(super) events: Vec<GameEvent>,
}

impl Game {
    // === Construction ===

    /// Shuffle and deal a new match, redealing until the deal survives the
    /// configured president policy.
    ///
    /// Panics unless the configuration has 2 or 3 players.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        config.validate();
        let mut rng = GameRng::new(seed);

        let mut attempt = 1u32;
        loop {
            let deck = shuffled_deck(&mut rng);
            match Self::checked_deal(&config, deck) {
                Ok(deal) => {
                    debug!(seed, attempt, "dealt");
                    return Self::assemble(config, seed, deal);
                }
                Err(err) => {
                    debug!(seed, attempt, %err, "redealing");
                    attempt += 1;
                }
            }
        }
    }

    /// Deal from a caller-supplied deck without shuffling.
    ///
    /// The front of `deck` goes to seat 0's hand, then the other hands,
    /// then the board; the rest becomes the stock in order.
    ///
    /// Panics unless the configuration has 2 or 3 players.
    pub fn with_deck(config: GameConfig, deck: Vec<Card>) -> Result<Self, DealError> {
        config.validate();
        let deal = Self::checked_deal(&config, deck)?;
        Ok(Self::assemble(config, 0, deal))
    }

    fn checked_deal(config: &GameConfig, deck: Vec<Card>) -> Result<Deal, DealError> {
        let deal = Deal::split(config, deck)?;
        match deal.president(config.president_redeal) {
            Some(err) => Err(err),
            None => Ok(deal),
        }
    }

    fn assemble(config: GameConfig, seed: u64, deal: Deal) -> Self {
        let kukjin = config.kukjin_as_double_pi;
        let mut players = PlayerMap::new(config.player_count, |id| Player::new(id, kukjin));
        for (id, hand) in PlayerId::all(config.player_count).zip(deal.hands) {
            players[id].deal(hand);
        }
        players[PlayerId::new(0)].acquire(deal.board_bonus);

        let mut game = Self {
            config,
            seed,
            players,
            board: Board::from_cards(deal.board),
            stock: Stock::new(deal.stock),
            status: GameStatus::Initialized,
            turn: PlayerId::new(0),
            round: 0,
            pending: None,
            winner: None,
            president_cursor: 0,
            ctx: TurnContext::default(),
            history: Vector::new(),
            events: Vec::new(),
        };
        game.advance();
        game
    }

    // === Protocol ===

    /// Answer the pending question. Returns `false` and changes nothing if
    /// the action is rejected.
    pub fn action(&mut self, action: Action) -> bool {
        self.try_action(action).is_ok()
    }

    /// Answer the pending question, reporting why a rejected action does
    /// not fit.
    pub fn try_action(&mut self, action: Action) -> Result<(), ActionError> {
        let player = self.turn;
        let round = self.round;
        let status = self.status;

        if let Err(err) = self.apply(action) {
            debug!(%player, ?status, ?action, %err, "action rejected");
            return Err(err);
        }

        debug!(%player, ?status, ?action, "action accepted");
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, round, sequence));
        self.advance();
        Ok(())
    }

    /// Validate and apply one action. Nothing is mutated on `Err`.
    fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        if self.status.is_terminal() {
            return Err(ActionError::GameOver);
        }

        match (self.status, action) {
            (GameStatus::AskPresident, Action::Go { go }) => self.answer_president(go),
            (GameStatus::AskCardToThrow, Action::Throw { card, shake_or_bomb }) => {
                let kind = self.classify_throw(card, shake_or_bomb)?;
                self.ask(GameStatus::AnsweredCardToThrow, Some(Pending::Throw(kind)));
                Ok(())
            }
            (GameStatus::AskCardToCapture, Action::Capture { card }) => self.answer_pair(card),
            (GameStatus::AskCardToCapture, Action::Stack { stack }) => {
                self.answer_same_month(stack)
            }
            (GameStatus::AskGoStop, Action::Go { go }) => {
                self.answer_go_stop(go);
                Ok(())
            }
            (status, action) => Err(ActionError::UnexpectedAction { status, action }),
        }
    }

    /// Run transient statuses until a question or a terminal status.
    fn advance(&mut self) {
        loop {
            match self.status {
                GameStatus::Initialized | GameStatus::AnsweredPresident => {
                    self.scan_presidents()
                }
                GameStatus::AnsweredCardToThrow => self.execute_throw(),
                _ => break,
            }
        }
    }

    pub(super) fn ask(&mut self, status: GameStatus, pending: Option<Pending>) {
        self.status = status;
        self.pending = pending;
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        trace!(?event);
        self.events.push(event);
    }

    /// Every action the pending question accepts.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match (self.status, &self.pending) {
            (GameStatus::AskPresident | GameStatus::AskGoStop, _) => {
                vec![Action::Go { go: true }, Action::Go { go: false }]
            }
            (GameStatus::AskCardToThrow, _) => {
                let player = self.current_player();
                let mut actions = Vec::with_capacity(player.hand().len() + 1);
                for card in player.hand().iter().copied() {
                    actions.push(Action::throw(card));
                    if self.classify_throw(Some(card), true).is_ok() {
                        actions.push(Action::declare(card));
                    }
                }
                if player.bomb_card_cnt() > 0 {
                    actions.push(Action::bomb_token());
                }
                actions
            }
            (
                GameStatus::AskCardToCapture,
                Some(Pending::Capture(CaptureChoice::Pair { candidates, .. })),
            ) => candidates.iter().map(|&card| Action::Capture { card }).collect(),
            (GameStatus::AskCardToCapture, Some(Pending::Capture(CaptureChoice::SameMonth { .. }))) => {
                vec![Action::Stack { stack: true }, Action::Stack { stack: false }]
            }
            _ => Vec::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the deal was shuffled from (0 for a stacked deck).
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seat whose question is pending.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Completed passes around the table.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn stock_remaining(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Payload of the outstanding question.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Events since the start of the match or the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Owned copy of the whole match.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            round: self.round,
            turn: self.turn,
            players: self.players.iter().map(|(_, p)| p.snapshot()).collect(),
            board: self.board.snapshot(),
            stock_remaining: self.stock.len(),
            pending: self.pending.clone(),
            winner: self.winner,
        }
    }

    /// Check that every card is in exactly one place and that shaken cards
    /// are still in hand.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = [0usize; Card::COUNT];
        let located = self
            .players
            .iter()
            .flat_map(|(_, p)| p.hand().iter().chain(p.acquired().iter()).copied())
            .chain(self.board.iter())
            .chain(self.stock.iter());
        for card in located {
            seen[card.code() as usize] += 1;
        }

        for card in Card::ALL {
            match seen[card.code() as usize] {
                1 => {}
                0 => return Err(InvariantViolation::Missing(card)),
                count => return Err(InvariantViolation::Duplicated { card, count }),
            }
        }

        for (player, p) in self.players.iter() {
            if let Some(&card) = p.shaken().iter().find(|c| !p.holds(**c)) {
                return Err(InvariantViolation::ShakenNotHeld { player, card });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::full_deck;

    #[test]
    fn test_new_is_deterministic() {
        let a = Game::new(GameConfig::new(2), 99);
        let b = Game::new(GameConfig::new(2), 99);
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_new_deals_without_presidents() {
        for seed in 0..50 {
            let game = Game::new(GameConfig::new(3), seed);
            assert_eq!(game.status(), GameStatus::AskCardToThrow);
            assert_eq!(game.turn(), PlayerId::new(0));
            assert_eq!(game.board().president_months().count(), 0);
            for (_, player) in game.players() {
                assert!(player.president_months().is_empty());
                assert_eq!(player.hand().len(), 7);
            }
            assert!(game.check_invariants().is_ok());
        }
    }

    #[test]
    #[should_panic(expected = "Player count must be 2 or 3")]
    fn test_bad_player_count_panics() {
        let mut config = GameConfig::new(2);
        config.player_count = 4;
        let _ = Game::new(config, 0);
    }

    #[test]
    fn test_with_deck_rejects_presidents() {
        // Unshuffled, the board holds all of June
        let err = Game::with_deck(GameConfig::new(2), full_deck()).unwrap_err();
        assert!(matches!(err, DealError::President { holder: None, .. }));
    }

    #[test]
    fn test_unheld_card_changes_nothing() {
        let mut game = Game::new(GameConfig::new(2), 3);
        let card = game.board().iter().next().unwrap();
        let before = game.snapshot();

        assert!(!game.action(Action::throw(card)));
        assert_eq!(game.try_action(Action::throw(card)), Err(ActionError::CardNotHeld(card)));
        assert_eq!(game.snapshot(), before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_wrong_action_kind_rejected() {
        let mut game = Game::new(GameConfig::new(2), 3);
        assert!(matches!(
            game.try_action(Action::Go { go: true }),
            Err(ActionError::UnexpectedAction { status: GameStatus::AskCardToThrow, .. })
        ));
        assert_eq!(game.try_action(Action::bomb_token()), Err(ActionError::NoBombTokens));
    }

    #[test]
    fn test_history_records_accepted_actions() {
        let mut game = Game::new(GameConfig::new(2), 11);
        let action = game.legal_actions()[0];
        assert!(game.action(action));

        let record = &game.history()[0];
        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.action, action);
        assert_eq!(record.round, 0);
        assert_eq!(record.sequence, 0);
        assert!(!game.events().is_empty());
    }

    #[test]
    fn test_drain_events() {
        let mut game = Game::new(GameConfig::new(2), 12);
        let action = game.legal_actions()[0];
        game.action(action);

        let drained = game.drain_events();
        assert!(matches!(drained[0], GameEvent::Thrown { .. }));
        assert!(game.events().is_empty());
    }

    #[test]
    fn test_stock_exhaustion_is_a_draw() {
        let mut game = Game::new(GameConfig::new(2), 5);
        // Move the stock into seat 1's captures so nothing is left to draw
        let rest: Vec<Card> = game.stock.iter().collect();
        game.stock = Stock::default();
        game.players[PlayerId::new(1)].acquire(rest);
        assert!(game.check_invariants().is_ok());

        for _ in 0..3 {
            if game.status().is_terminal() {
                break;
            }
            let action = game.legal_actions()[0];
            assert!(game.action(action));
        }

        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.winner(), None);
        assert_eq!(game.events().last(), Some(&GameEvent::Exhausted));
        assert_eq!(game.try_action(Action::Go { go: true }), Err(ActionError::GameOver));
        assert!(game.legal_actions().is_empty());
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_clone_is_independent() {
        let game = Game::new(GameConfig::new(2), 21);
        let mut branch = game.clone();
        let action = branch.legal_actions()[0];
        branch.action(action);

        assert!(game.history().is_empty());
        assert_eq!(branch.history().len(), 1);
    }
}
