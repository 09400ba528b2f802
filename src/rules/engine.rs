//! Rules engine trait for driving a match generically.
//!
//! Hosts and test drivers use `RulesEngine` to:
//! - Enumerate the legal answers to the pending question
//! - Apply an answer
//! - Detect the end of the match

use crate::core::{Action, ActionError, GameRng, GameStatus, PlayerId};
use crate::game::Game;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Empty once the match is over
/// - `apply_action`: Must leave the state untouched on `Err`
/// - `is_terminal`: Return None if the match continues
pub trait RulesEngine {
    /// Seat whose question is pending, `None` once the match is over.
    fn active_player(&self) -> Option<PlayerId>;

    /// Every action the pending question accepts.
    fn legal_actions(&self) -> Vec<Action>;

    /// Answer the pending question.
    fn apply_action(&mut self, action: Action) -> Result<(), ActionError>;

    /// Check if the match is over.
    ///
    /// Returns `Some(result)` if it has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether an action answers the pending question.
    fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }

    /// Play uniformly random legal actions until the match ends or
    /// `max_steps` actions have been applied.
    fn play_out(&mut self, rng: &mut GameRng, max_steps: usize) -> Option<GameResult> {
        for _ in 0..max_steps {
            if let Some(result) = self.is_terminal() {
                return Some(result);
            }

            let actions = self.legal_actions();
            let action = *rng.choose(&actions)?;
            self.apply_action(action).ok()?;
        }

        self.is_terminal()
    }
}

impl RulesEngine for Game {
    fn active_player(&self) -> Option<PlayerId> {
        if self.status().is_terminal() {
            None
        } else {
            Some(self.turn())
        }
    }

    fn legal_actions(&self) -> Vec<Action> {
        Game::legal_actions(self)
    }

    fn apply_action(&mut self, action: Action) -> Result<(), ActionError> {
        self.try_action(action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        match self.status() {
            GameStatus::Done => self.winner().map(GameResult::Winner),
            GameStatus::Draw => Some(GameResult::Draw),
            _ => None,
        }
    }
}
