//! # gostop
//!
//! A rules engine for the Korean flower-card game Go-Stop (Matgo), for two
//! or three players.
//!
//! ## Design Principles
//!
//! 1. **One Question at a Time**: The engine is an explicit state machine.
//!    Each status asks the current seat one question; the host answers with
//!    an `Action` and the engine resolves everything up to the next question.
//!
//! 2. **Rejected Means Unchanged**: An action that does not fit the pending
//!    question is refused without touching the state.
//!
//! 3. **Rules as Data**: Card categories and scoring breakpoints are static
//!    tables; the scoring code only reads flags and counts.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Hands, captures, the stock and the
//!   action history use `im` collections, so a `Game` clones in O(1) for
//!   host snapshots and search.
//!
//! - **Deterministic Deals**: Shuffles come from a seeded ChaCha8 RNG. The
//!   same seed and the same actions replay the same match.
//!
//! ## Modules
//!
//! - `cards`: Card identities, months, categories and the deck
//! - `core`: Players, RNG, configuration, actions, status, events, errors
//! - `zones`: The board and the stock
//! - `scoring`: Category tallies, breakpoints and multipliers
//! - `game`: The match engine and per-seat state
//! - `rules`: RulesEngine trait for generic drivers

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod scoring;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, CardProperties, Month};

pub use crate::core::{
    Action, ActionError, ActionRecord, CaptureChoice, CardSource, DealError, GameConfig,
    GameEvent, GameRng, GameSnapshot, GameStatus, InvariantViolation, Pending,
    PlayerId, PlayerMap, PlayerSnapshot, PresidentRedeal, ThrowKind,
};

pub use crate::zones::{Board, BoardSnapshot, Stock};

pub use crate::scoring::{CategoryTally, Multipliers};

pub use crate::game::{Game, Player};

pub use crate::rules::{GameResult, RulesEngine};
