//! Per-seat state: hand, captures, shaken cards, and counters.
//!
//! A `Player` is passive. The engine mutates it during a transition; hosts
//! only ever see `&Player` or a [`PlayerSnapshot`].
//!
//! ## Scoring
//!
//! [`Player::score`] reads the acquired set through
//! [`CategoryTally`](crate::scoring::CategoryTally). A claimed president
//! short-circuits to the flat president score.

use im::OrdSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, Month};
use crate::core::{PlayerId, PlayerSnapshot};
use crate::scoring::{amplify, base_score, CategoryTally, Multipliers, PRESIDENT_SCORE};

/// Months a player holds in some quantity.
pub type MonthList = SmallVec<[Month; 2]>;

/// Pi total at or below which a player is exposed to a pi penalty.
pub const PIBAK_LIMIT: u32 = 5;

/// One seat's cards and counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    hand: OrdSet<Card>,
    acquired: OrdSet<Card>,
    shaken: OrdSet<Card>,
    go_cnt: u32,
    shake_cnt: u32,
    bomb_cnt: u32,
    bomb_card_cnt: u32,
    president_cnt: u32,
    bbuck_cnt: u32,
    latest_go_score: u32,
    kukjin_as_double_pi: bool,
}

impl Player {
    /// Create an empty seat.
    #[must_use]
    pub fn new(id: PlayerId, kukjin_as_double_pi: bool) -> Self {
        Self {
            id,
            hand: OrdSet::new(),
            acquired: OrdSet::new(),
            shaken: OrdSet::new(),
            go_cnt: 0,
            shake_cnt: 0,
            bomb_cnt: 0,
            bomb_card_cnt: 0,
            president_cnt: 0,
            bbuck_cnt: 0,
            latest_go_score: 0,
            kukjin_as_double_pi,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &OrdSet<Card> {
        &self.hand
    }

    /// Cards captured so far.
    #[must_use]
    pub fn acquired(&self) -> &OrdSet<Card> {
        &self.acquired
    }

    /// Hand cards revealed by a shake this round.
    #[must_use]
    pub fn shaken(&self) -> &OrdSet<Card> {
        &self.shaken
    }

    #[must_use]
    pub fn go_cnt(&self) -> u32 {
        self.go_cnt
    }

    #[must_use]
    pub fn shake_cnt(&self) -> u32 {
        self.shake_cnt
    }

    #[must_use]
    pub fn bomb_cnt(&self) -> u32 {
        self.bomb_cnt
    }

    /// Remaining bomb tokens: turns that may be played from the stock alone.
    #[must_use]
    pub fn bomb_card_cnt(&self) -> u32 {
        self.bomb_card_cnt
    }

    #[must_use]
    pub fn president_cnt(&self) -> u32 {
        self.president_cnt
    }

    /// Number of three-card piles this player swept.
    #[must_use]
    pub fn bbuck_cnt(&self) -> u32 {
        self.bbuck_cnt
    }

    /// Unamplified score at the last go.
    #[must_use]
    pub fn latest_go_score(&self) -> u32 {
        self.latest_go_score
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// True while the player can still throw something.
    #[must_use]
    pub fn can_play(&self) -> bool {
        !self.hand.is_empty() || self.bomb_card_cnt > 0
    }

    // === Month grouping ===

    fn month_counts(&self) -> FxHashMap<Month, usize> {
        let mut counts = FxHashMap::default();
        for month in self.hand.iter().filter_map(|c| c.month()) {
            *counts.entry(month).or_insert(0) += 1;
        }
        counts
    }

    fn months_with(&self, count: usize) -> MonthList {
        let mut months: MonthList = self
            .month_counts()
            .into_iter()
            .filter(|(_, n)| *n == count)
            .map(|(m, _)| m)
            .collect();
        months.sort_unstable();
        months
    }

    /// Hand cards of one month, in code order.
    pub fn hand_of_month(&self, month: Month) -> impl Iterator<Item = Card> + '_ {
        self.hand.iter().copied().filter(move |c| c.month() == Some(month))
    }

    /// Months held four-strong.
    #[must_use]
    pub fn president_months(&self) -> MonthList {
        self.months_with(4)
    }

    /// Months held three-strong.
    #[must_use]
    pub fn shakable_months(&self) -> MonthList {
        self.months_with(3)
    }

    /// True if a card of `month` was revealed by a shake.
    #[must_use]
    pub fn has_shaken(&self, month: Month) -> bool {
        self.shaken.iter().any(|c| c.month() == Some(month))
    }

    // === Claims ===

    /// True when the unamplified score is positive and beats the score
    /// recorded at the last go.
    #[must_use]
    pub fn can_say_go(&self) -> bool {
        let score = self.score(false);
        score > 0 && score > self.latest_go_score
    }

    /// Record a go. Fails unless [`can_say_go`](Self::can_say_go).
    pub fn claim_go(&mut self) -> bool {
        if !self.can_say_go() {
            return false;
        }
        self.go_cnt += 1;
        self.latest_go_score = self.score(false);
        true
    }

    /// Record a president claim on a month held four-strong.
    pub fn claim_president(&mut self, month: Month) -> bool {
        if !self.president_months().contains(&month) {
            return false;
        }
        self.president_cnt += 1;
        true
    }

    /// Reveal all three hand cards of `month`.
    ///
    /// Fails unless exactly three are held and the month is not already
    /// shaken. Whether the board allows it is the engine's call.
    pub fn shake(&mut self, month: Month) -> bool {
        let cards: SmallVec<[Card; 4]> = self.hand_of_month(month).collect();
        if cards.len() != 3 || self.has_shaken(month) {
            return false;
        }
        for card in cards {
            self.shaken.insert(card);
        }
        self.shake_cnt += 1;
        true
    }

    /// Remove a card from hand, or spend a bomb token for `None`.
    pub fn throw(&mut self, card: Option<Card>) -> bool {
        match card {
            Some(card) => {
                if self.hand.remove(&card).is_none() {
                    return false;
                }
                self.shaken.remove(&card);
                true
            }
            None => {
                if self.bomb_card_cnt == 0 {
                    return false;
                }
                self.bomb_card_cnt -= 1;
                true
            }
        }
    }

    // === Scoring ===

    /// Category counts over the acquired set.
    #[must_use]
    pub fn tally(&self) -> CategoryTally {
        CategoryTally::from_cards(self.acquired.iter().copied(), self.kukjin_as_double_pi)
    }

    /// Current score; `amplifier` applies go, animal, shake and bomb
    /// multipliers.
    #[must_use]
    pub fn score(&self, amplifier: bool) -> u32 {
        if self.president_cnt > 0 {
            return PRESIDENT_SCORE;
        }

        let tally = self.tally();
        let base = base_score(&tally);
        if !amplifier {
            return base;
        }

        amplify(
            base,
            &Multipliers {
                go_cnt: self.go_cnt,
                shake_cnt: self.shake_cnt,
                bomb_cnt: self.bomb_cnt,
                animal: tally.animal,
            },
        )
    }

    /// Some pi captured, but no more than five.
    #[must_use]
    pub fn pibakable(&self) -> bool {
        let pi = self.tally().pi;
        pi > 0 && pi <= PIBAK_LIMIT
    }

    /// No brights captured.
    #[must_use]
    pub fn gwangbakable(&self) -> bool {
        self.tally().bright == 0
    }

    /// Surrender the captured card with the lowest positive pi value.
    ///
    /// Among equal values the lowest card code goes first. That order
    /// follows from the sorted acquired set and carries no rule meaning.
    pub fn remove_pi(&mut self) -> Option<Card> {
        let card = self
            .acquired
            .iter()
            .copied()
            .filter(|c| c.pi_value() > 0)
            .min_by_key(|c| c.pi_value())?;
        self.acquired.remove(&card);
        Some(card)
    }

    // === Engine-side mutation ===

    pub(crate) fn deal(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub(crate) fn acquire(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.acquired.extend(cards);
    }

    /// Put back cards captured earlier in the same turn.
    pub(crate) fn release(&mut self, card: Card) -> bool {
        self.acquired.remove(&card).is_some()
    }

    pub(crate) fn record_bomb(&mut self, thrown: usize) {
        self.bomb_cnt += 1;
        self.bomb_card_cnt += thrown.saturating_sub(1) as u32;
    }

    pub(crate) fn record_bbuck(&mut self) {
        self.bbuck_cnt += 1;
    }

    /// Owned copy for read-only callers.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            player: self.id,
            hand: self.hand.iter().copied().collect(),
            acquired: self.acquired.iter().copied().collect(),
            shaken: self.shaken.iter().copied().collect(),
            go_cnt: self.go_cnt,
            shake_cnt: self.shake_cnt,
            bomb_cnt: self.bomb_cnt,
            bomb_card_cnt: self.bomb_card_cnt,
            president_cnt: self.president_cnt,
            bbuck_cnt: self.bbuck_cnt,
            latest_go_score: self.latest_go_score,
            score: self.score(false),
            amplified_score: self.score(true),
        }
    }
}
