//! Core engine types: players, RNG, configuration, actions, state, events,
//! errors.
//!
//! These are the building blocks shared by the zones, scoring and game
//! modules. Nothing here knows how a turn is resolved.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, PresidentRedeal};
pub use error::{ActionError, DealError, InvariantViolation};
pub use event::{CardBatch, GameEvent};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{
    CaptureChoice, CardSource, GameSnapshot, GameStatus, Pending, PlayerSnapshot, ThrowKind,
};
