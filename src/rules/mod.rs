//! Rules engine trait for generic match drivers.
//!
//! `Game` implements `RulesEngine` so that hosts, benchmarks and property
//! tests can enumerate and apply legal actions without knowing how a turn
//! is resolved.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
