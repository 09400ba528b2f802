//! The face-down stock.
//!
//! Cards are turned up from the front. An empty stock when a draw is due
//! ends the match without a winner.

use im::Vector;

use crate::cards::Card;

/// Remaining face-down cards, consumed front first.
///
/// Backed by `im::Vector` so cloning a match is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stock {
    cards: Vector<Card>,
}

impl Stock {
    /// Create a stock; the first card yielded is drawn first.
    pub(crate) fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Turn up the front card.
    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Iterate front to back.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}
