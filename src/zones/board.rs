//! The face-up board.
//!
//! Twelve piles indexed by month plus, for each month, the player who last
//! swept that month's pile. Only the engine mutates a `Board`; readers get
//! slices or an owned [`BoardSnapshot`].

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Month};
use crate::core::PlayerId;

/// One month's pile, in the order cards were laid.
pub type Pile = SmallVec<[Card; 4]>;

/// Per-month piles and sweep attribution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    piles: [Pile; Month::COUNT],
    sweepers: [Option<PlayerId>; Month::COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out dealt cards. Bonus cards must already be stripped.
    pub(crate) fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut board = Self::new();
        for card in cards {
            let placed = board.place(card);
            debug_assert!(placed, "bonus card {card} dealt onto the board");
        }
        board
    }

    /// Pile for a month.
    #[must_use]
    pub fn pile(&self, month: Month) -> &[Card] {
        &self.piles[month.index()]
    }

    /// Pile for a raw month number; empty outside 1-12.
    #[must_use]
    pub fn by_month(&self, month: u8) -> &[Card] {
        match Month::new(month) {
            Some(m) => self.pile(m),
            None => &[],
        }
    }

    /// Number of cards in a month's pile.
    #[must_use]
    pub fn pile_size(&self, month: Month) -> usize {
        self.piles[month.index()].len()
    }

    /// Every card on the board.
    #[must_use]
    pub fn as_set(&self) -> OrdSet<Card> {
        self.iter().collect()
    }

    /// Total cards on the board.
    #[must_use]
    pub fn count(&self) -> usize {
        self.piles.iter().map(SmallVec::len).sum()
    }

    /// True if no pile holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.iter().all(SmallVec::is_empty)
    }

    /// Iterate over every card, January first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.piles.iter().flat_map(|p| p.iter().copied())
    }

    /// Check if a card is on the board.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        card.month()
            .is_some_and(|m| self.piles[m.index()].contains(&card))
    }

    /// Months whose pile holds all four cards.
    pub fn president_months(&self) -> impl Iterator<Item = Month> + '_ {
        Month::all().filter(|m| self.pile_size(*m) == 4)
    }

    /// The player who last swept this month's pile.
    #[must_use]
    pub fn whose_bbuck(&self, month: Month) -> Option<PlayerId> {
        self.sweepers[month.index()]
    }

    /// Record `player` as the last sweeper of `month`.
    pub(crate) fn set_bbuck(&mut self, player: PlayerId, month: Month) {
        self.sweepers[month.index()] = Some(player);
    }

    /// Lay a card on its month's pile. Returns `false` for bonus cards.
    pub(crate) fn place(&mut self, card: Card) -> bool {
        match card.month() {
            Some(m) => {
                self.piles[m.index()].push(card);
                true
            }
            None => false,
        }
    }

    /// Remove one specific card. Returns `false` if it was not on the board.
    pub(crate) fn take(&mut self, card: Card) -> bool {
        let Some(month) = card.month() else {
            return false;
        };
        let pile = &mut self.piles[month.index()];
        match pile.iter().position(|c| *c == card) {
            Some(i) => {
                pile.remove(i);
                true
            }
            None => false,
        }
    }

    /// Empty a month's pile, returning its cards.
    pub(crate) fn take_all(&mut self, month: Month) -> Pile {
        std::mem::take(&mut self.piles[month.index()])
    }

    /// Owned copy for read-only callers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            piles: self.piles.iter().map(|p| p.to_vec()).collect(),
            sweepers: self.sweepers.to_vec(),
        }
    }
}

/// Owned, serializable copy of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Piles indexed by month - 1.
    pub piles: Vec<Vec<Card>>,
    /// Last sweeper per month, indexed by month - 1.
    pub sweepers: Vec<Option<PlayerId>>,
}

impl BoardSnapshot {
    /// Pile for a raw month number; empty outside 1-12.
    #[must_use]
    pub fn by_month(&self, month: u8) -> &[Card] {
        match Month::new(month) {
            Some(m) => &self.piles[m.index()],
            None => &[],
        }
    }

    /// Total cards on the board.
    #[must_use]
    pub fn count(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(n: u8) -> Month {
        Month::new(n).unwrap()
    }

    #[test]
    fn test_place_and_views() {
        let board = Board::from_cards([Card::JanBright, Card::JanPi1, Card::OctDeer]);

        assert_eq!(board.pile(month(1)), &[Card::JanBright, Card::JanPi1]);
        assert_eq!(board.by_month(10), &[Card::OctDeer]);
        assert_eq!(board.pile_size(month(2)), 0);
        assert_eq!(board.count(), 3);
        assert!(board.contains(Card::OctDeer));
        assert!(!board.contains(Card::OctPi1));
        assert_eq!(board.as_set().len(), 3);
    }

    #[test]
    fn test_by_month_out_of_range_is_empty() {
        let board = Board::from_cards([Card::JanBright]);
        assert!(board.by_month(0).is_empty());
        assert!(board.by_month(13).is_empty());
    }

    #[test]
    fn test_bonus_cards_have_no_pile() {
        let mut board = Board::new();
        assert!(!board.place(Card::BonusTriple));
        assert!(board.is_empty());
        assert!(!board.contains(Card::BonusTriple));
    }

    #[test]
    fn test_take() {
        let mut board = Board::from_cards([Card::FebBird, Card::FebRedRibbon]);
        assert!(board.take(Card::FebBird));
        assert!(!board.take(Card::FebBird));
        assert_eq!(board.pile(month(2)), &[Card::FebRedRibbon]);
    }

    #[test]
    fn test_take_all_and_bbuck() {
        let mut board = Board::from_cards([Card::MarBright, Card::MarPi1, Card::MarPi2]);
        assert_eq!(board.whose_bbuck(month(3)), None);

        let swept = board.take_all(month(3));
        board.set_bbuck(PlayerId::new(1), month(3));

        assert_eq!(swept.len(), 3);
        assert!(board.is_empty());
        assert_eq!(board.whose_bbuck(month(3)), Some(PlayerId::new(1)));

        // A refilled pile keeps the earlier attribution until swept again
        board.place(Card::MarRedRibbon);
        assert_eq!(board.whose_bbuck(month(3)), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_president_months() {
        let board = Board::from_cards(Card::of_month(month(6)).into_iter().chain([Card::JulBoar]));
        let months: Vec<_> = board.president_months().collect();
        assert_eq!(months, vec![month(6)]);
    }

    #[test]
    fn test_snapshot() {
        let mut board = Board::from_cards([Card::NovBright, Card::DecBird]);
        board.set_bbuck(PlayerId::new(0), month(5));

        let snap = board.snapshot();
        assert_eq!(snap.by_month(11), &[Card::NovBright]);
        assert_eq!(snap.by_month(0), &[] as &[Card]);
        assert_eq!(snap.count(), 2);
        assert_eq!(snap.sweepers[4], Some(PlayerId::new(0)));

        let json = serde_json::to_string(&snap).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
