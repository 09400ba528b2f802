//! Deck construction and integrity checks.

use rustc_hash::FxHashSet;

use super::card::Card;
use crate::core::rng::GameRng;

/// A fresh, unshuffled deck in code order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    Card::ALL.to_vec()
}

/// A deck shuffled with the given RNG.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}

/// True if `cards` contains every card exactly once.
#[must_use]
pub fn is_complete_deck(cards: &[Card]) -> bool {
    if cards.len() != Card::COUNT {
        return false;
    }
    let mut seen = FxHashSet::default();
    cards.iter().all(|c| seen.insert(*c))
}
