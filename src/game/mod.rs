//! The match: dealing, the turn machine, and per-seat state.
//!
//! ## Key Types
//!
//! - `Game`: owns the board, the stock and every seat; answers actions
//! - `Player`: one seat's hand, captures and counters, plus its score
//!
//! Dealing lives in `deal`, turn resolution in `turn`; both are internal
//! to `Game`.

mod deal;
pub mod engine;
pub mod player;
mod turn;

pub use engine::Game;
pub use player::{MonthList, Player, PIBAK_LIMIT};
