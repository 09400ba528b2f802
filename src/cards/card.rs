//! Card identity and month.
//!
//! A Go-Stop deck is a closed set: 48 month cards (four per month, in
//! consecutive code blocks) plus three bonus cards that belong to no month.
//! `Card` is a `Copy` enum over that set; every categorical predicate is a
//! lookup into the static table in [`super::properties`].

use serde::{Deserialize, Serialize};

use super::properties::{props, CardProperties};

/// Calendar month of a card (1 = January, 12 = December).
///
/// Bonus cards have no month; see [`Card::month`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month(u8);

impl Month {
    /// Number of months in the deck.
    pub const COUNT: usize = 12;

    /// Create a month, returning `None` outside 1-12.
    #[must_use]
    pub const fn new(month: u8) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self(month))
        } else {
            None
        }
    }

    /// The month number (1-12).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index, for month-indexed arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate January through December.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        f.write_str(NAMES[self.index()])
    }
}

/// One physical card.
///
/// Codes are laid out month by month, four cards per month, followed by
/// the three bonus cards. Ordering and equality are by code.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    JanBright,
    JanRedRibbon,
    JanPi1,
    JanPi2,

    FebBird,
    FebRedRibbon,
    FebPi1,
    FebPi2,

    MarBright,
    MarRedRibbon,
    MarPi1,
    MarPi2,

    AprBird,
    AprRibbon,
    AprPi1,
    AprPi2,

    MayBridge,
    MayRibbon,
    MayPi1,
    MayPi2,

    JunButterfly,
    JunBlueRibbon,
    JunPi1,
    JunPi2,

    JulBoar,
    JulRibbon,
    JulPi1,
    JulPi2,

    AugBright,
    AugBird,
    AugPi1,
    AugPi2,

    SepCup,
    SepBlueRibbon,
    SepPi1,
    SepPi2,

    OctDeer,
    OctBlueRibbon,
    OctPi1,
    OctPi2,

    NovBright,
    NovDoublePi,
    NovPi1,
    NovPi2,

    DecBright,
    DecBird,
    DecRibbon,
    DecDoublePi,

    BonusDouble1,
    BonusDouble2,
    BonusTriple,
}

impl Card {
    /// Total number of distinct cards.
    pub const COUNT: usize = 51;

    /// Number of cards that belong to a month.
    pub const MONTH_CARDS: usize = 48;

    /// Every card, in code order.
    #[rustfmt::skip]
    pub const ALL: [Card; Card::COUNT] = [
        Card::JanBright, Card::JanRedRibbon, Card::JanPi1, Card::JanPi2,
        Card::FebBird, Card::FebRedRibbon, Card::FebPi1, Card::FebPi2,
        Card::MarBright, Card::MarRedRibbon, Card::MarPi1, Card::MarPi2,
        Card::AprBird, Card::AprRibbon, Card::AprPi1, Card::AprPi2,
        Card::MayBridge, Card::MayRibbon, Card::MayPi1, Card::MayPi2,
        Card::JunButterfly, Card::JunBlueRibbon, Card::JunPi1, Card::JunPi2,
        Card::JulBoar, Card::JulRibbon, Card::JulPi1, Card::JulPi2,
        Card::AugBright, Card::AugBird, Card::AugPi1, Card::AugPi2,
        Card::SepCup, Card::SepBlueRibbon, Card::SepPi1, Card::SepPi2,
        Card::OctDeer, Card::OctBlueRibbon, Card::OctPi1, Card::OctPi2,
        Card::NovBright, Card::NovDoublePi, Card::NovPi1, Card::NovPi2,
        Card::DecBright, Card::DecBird, Card::DecRibbon, Card::DecDoublePi,
        Card::BonusDouble1, Card::BonusDouble2, Card::BonusTriple,
    ];

    /// Raw code (0-50).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a card by raw code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Card> {
        Card::ALL.get(code as usize).copied()
    }

    /// Month of this card, `None` for bonus cards.
    #[must_use]
    pub const fn month(self) -> Option<Month> {
        let code = self as u8;
        if (code as usize) < Card::MONTH_CARDS {
            Some(Month(code / 4 + 1))
        } else {
            None
        }
    }

    /// The four cards of a month, in code order.
    #[must_use]
    pub fn of_month(month: Month) -> [Card; 4] {
        let base = month.index() * 4;
        [Card::ALL[base], Card::ALL[base + 1], Card::ALL[base + 2], Card::ALL[base + 3]]
    }

    /// Static category data for this card.
    #[must_use]
    pub fn properties(self) -> &'static CardProperties {
        props(self)
    }

    #[must_use]
    pub fn is_bright(self) -> bool {
        self.properties().bright
    }

    /// The December bright, which scores less in a three-bright set.
    #[must_use]
    pub fn is_sub_bright(self) -> bool {
        self.properties().sub_bright
    }

    #[must_use]
    pub fn is_bird(self) -> bool {
        self.properties().bird
    }

    #[must_use]
    pub fn is_animal(self) -> bool {
        self.properties().animal
    }

    #[must_use]
    pub fn is_red_ribbon(self) -> bool {
        self.properties().red_ribbon
    }

    #[must_use]
    pub fn is_blue_ribbon(self) -> bool {
        self.properties().blue_ribbon
    }

    #[must_use]
    pub fn is_plain_ribbon(self) -> bool {
        self.properties().plain_ribbon
    }

    /// Any of the three ribbon colours.
    #[must_use]
    pub fn is_ribbon(self) -> bool {
        let p = self.properties();
        p.red_ribbon || p.blue_ribbon || p.plain_ribbon
    }

    /// Pi weight: 0 for non-pi cards, otherwise 1, 2 or 3.
    #[must_use]
    pub fn pi_value(self) -> u8 {
        self.properties().pi
    }

    #[must_use]
    pub fn is_bonus(self) -> bool {
        self.properties().bonus
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        assert!(Month::new(0).is_none());
        assert!(Month::new(13).is_none());
        assert_eq!(Month::new(1).map(Month::index), Some(0));
        assert_eq!(Month::new(12).map(Month::number), Some(12));
        assert_eq!(Month::all().count(), 12);
    }

    #[test]
    fn test_month_derived_from_code_blocks() {
        assert_eq!(Card::JanBright.month(), Month::new(1));
        assert_eq!(Card::JanPi2.month(), Month::new(1));
        assert_eq!(Card::FebBird.month(), Month::new(2));
        assert_eq!(Card::DecDoublePi.month(), Month::new(12));
        assert_eq!(Card::BonusDouble1.month(), None);
        assert_eq!(Card::BonusTriple.month(), None);
    }

    #[test]
    fn test_all_is_in_code_order() {
        for (i, card) in Card::ALL.iter().enumerate() {
            assert_eq!(card.code() as usize, i);
            assert_eq!(Card::from_code(i as u8), Some(*card));
        }
        assert_eq!(Card::from_code(51), None);
    }

    #[test]
    fn test_of_month() {
        let sep = Month::new(9).unwrap();
        assert_eq!(
            Card::of_month(sep),
            [Card::SepCup, Card::SepBlueRibbon, Card::SepPi1, Card::SepPi2]
        );
        for month in Month::all() {
            assert!(Card::of_month(month).iter().all(|c| c.month() == Some(month)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::NovBright.to_string(), "NovBright");
        assert_eq!(Month::new(3).unwrap().to_string(), "Mar");
    }

    #[test]
    fn test_card_serialization() {
        let json = serde_json::to_string(&Card::AugBird).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Card::AugBird);
    }
}
