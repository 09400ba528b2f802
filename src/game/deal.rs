//! Splitting a deck into hands, board and stock.
//!
//! The deck is dealt front first: every hand in seat order, then the board,
//! then the stock. Bonus cards that land on the board go straight to seat 0's
//! captures and are not replaced.

use rustc_hash::FxHashMap;

use crate::cards::{is_complete_deck, Card, Month};
use crate::core::{DealError, GameConfig, PlayerId, PresidentRedeal};

/// A deck split into its starting locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub board: Vec<Card>,
    /// Bonus cards stripped from the board for seat 0.
    pub board_bonus: Vec<Card>,
    pub stock: Vec<Card>,
}

impl Deal {
    /// Split `deck` for `config`. The deck must be complete.
    pub fn split(config: &GameConfig, deck: Vec<Card>) -> Result<Self, DealError> {
        if !is_complete_deck(&deck) {
            return Err(DealError::IncompleteDeck);
        }

        let hand_size = config.hand_size();
        let mut cards = deck.into_iter();
        let hands: Vec<Vec<Card>> = (0..config.player_count)
            .map(|_| cards.by_ref().take(hand_size).collect())
            .collect();
        let (board_bonus, board): (Vec<Card>, Vec<Card>) = cards
            .by_ref()
            .take(config.board_size())
            .partition(|c| c.is_bonus());
        let stock = cards.collect();

        Ok(Self {
            hands,
            board,
            board_bonus,
            stock,
        })
    }

    /// The first president the redeal policy discards, if any.
    ///
    /// The board is checked before the hands.
    pub fn president(&self, policy: PresidentRedeal) -> Option<DealError> {
        if let Some(month) = four_of_a_month(&self.board) {
            return Some(DealError::President { month, holder: None });
        }

        if policy == PresidentRedeal::BoardOnly {
            return None;
        }

        self.hands.iter().enumerate().find_map(|(seat, hand)| {
            four_of_a_month(hand).map(|month| DealError::President {
                month,
                holder: Some(PlayerId::new(seat as u8)),
            })
        })
    }
}

/// Lowest month with all four cards present.
fn four_of_a_month(cards: &[Card]) -> Option<Month> {
    let mut counts: FxHashMap<Month, u8> = FxHashMap::default();
    for month in cards.iter().filter_map(|c| c.month()) {
        *counts.entry(month).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n == 4)
        .map(|(m, _)| m)
        .min()
}
