//! Shared card locations: the face-up board and the face-down stock.
//!
//! Hands and captured cards belong to players and live in
//! `game::player`.

pub mod board;
pub mod stock;

pub use board::{Board, BoardSnapshot, Pile};
pub use stock::Stock;
