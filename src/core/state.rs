//! Match status, pending questions, and read-only snapshots.
//!
//! ## GameStatus
//!
//! The explicit state of the turn machine. `Ask*` states wait for an
//! [`Action`](super::Action); `Answered*` and `Initialized` are transient
//! and only observable from inside a transition; `Done` and `Draw` are
//! terminal.
//!
//! ## Pending
//!
//! The payload of the outstanding question (or of the accepted throw while
//! it executes).
//!
//! ## Snapshots
//!
//! Owned copies handed to hosts. They can be serialized for a UI but carry
//! no way back into the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Card, Month};
use crate::zones::BoardSnapshot;

/// State of the turn machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Dealt; the president scan has not run yet.
    Initialized,
    /// A player holding four cards of a month must claim or continue.
    AskPresident,
    /// A president was declined; the scan continues with the next player.
    AnsweredPresident,
    /// The current player must throw.
    AskCardToThrow,
    /// The current player must resolve an ambiguous capture.
    AskCardToCapture,
    /// A throw was accepted and is being executed.
    AnsweredCardToThrow,
    /// The current player reached the go threshold and must go or stop.
    AskGoStop,
    /// The match ended with a winner.
    Done,
    /// The match ended without a winner.
    Draw,
}

impl GameStatus {
    /// True for `Done` and `Draw`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Done | GameStatus::Draw)
    }

    /// True for states that wait on the host.
    #[must_use]
    pub fn is_question(self) -> bool {
        matches!(
            self,
            GameStatus::AskPresident
                | GameStatus::AskCardToThrow
                | GameStatus::AskCardToCapture
                | GameStatus::AskGoStop
        )
    }
}

/// Where a played card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSource {
    Hand,
    Stock,
}

/// A validated throw, classified before execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowKind {
    /// A month card thrown on its own.
    Single(Card),
    /// A bonus card: captured at once, one pi from each opponent.
    Bonus(Card),
    /// The month is flagged as shaken, then the card is thrown.
    Shake(Card),
    /// Every hand card of the month is thrown onto the pile at once.
    Bomb { month: Month, cards: SmallVec<[Card; 4]> },
    /// A bomb token is spent and only the stock card is played.
    Token,
}

/// An ambiguous capture awaiting the player's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureChoice {
    /// The played card matches a two-card pile; pick the partner.
    Pair {
        source: CardSource,
        played: Card,
        candidates: [Card; 2],
    },
    /// The thrown card took a lone pile card and the stock turned up the
    /// third card of the same month.
    SameMonth {
        month: Month,
        captured: [Card; 2],
        drawn: Card,
    },
}

/// The payload of the outstanding question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pending {
    /// `AskPresident`: the player holds all four cards of these months.
    President { player: PlayerId, months: SmallVec<[Month; 2]> },
    /// `AnsweredCardToThrow`: the accepted throw.
    Throw(ThrowKind),
    /// `AskCardToCapture`.
    Capture(CaptureChoice),
    /// `AskGoStop`: the player's current unamplified score.
    GoStop { player: PlayerId, score: u32 },
}

/// Read-only copy of one player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: PlayerId,
    pub hand: Vec<Card>,
    pub acquired: Vec<Card>,
    pub shaken: Vec<Card>,
    pub go_cnt: u32,
    pub shake_cnt: u32,
    pub bomb_cnt: u32,
    pub bomb_card_cnt: u32,
    pub president_cnt: u32,
    pub bbuck_cnt: u32,
    pub latest_go_score: u32,
    /// Unamplified score.
    pub score: u32,
    /// Score with go, animal, shake and bomb multipliers applied.
    pub amplified_score: u32,
}

/// Read-only copy of the whole match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub round: u32,
    pub turn: PlayerId,
    pub players: Vec<PlayerSnapshot>,
    pub board: BoardSnapshot,
    pub stock_remaining: usize,
    pub pending: Option<Pending>,
    pub winner: Option<PlayerId>,
}
