//! Static category table.
//!
//! One row per card code. Scoring reads these flags and never branches on
//! card identity directly, so the rule data can be audited in one place.

use super::card::Card;

/// Categorical data for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardProperties {
    /// Pi weight (0 = not a pi).
    pub pi: u8,
    pub bright: bool,
    pub sub_bright: bool,
    pub animal: bool,
    pub bird: bool,
    pub red_ribbon: bool,
    pub blue_ribbon: bool,
    pub plain_ribbon: bool,
    pub bonus: bool,
}

const NONE: CardProperties = CardProperties {
    pi: 0,
    bright: false,
    sub_bright: false,
    animal: false,
    bird: false,
    red_ribbon: false,
    blue_ribbon: false,
    plain_ribbon: false,
    bonus: false,
};

const BRIGHT: CardProperties = CardProperties { bright: true, ..NONE };
const SUB_BRIGHT: CardProperties = CardProperties { bright: true, sub_bright: true, ..NONE };
const ANIMAL: CardProperties = CardProperties { animal: true, ..NONE };
const BIRD: CardProperties = CardProperties { animal: true, bird: true, ..NONE };
const RED: CardProperties = CardProperties { red_ribbon: true, ..NONE };
const BLUE: CardProperties = CardProperties { blue_ribbon: true, ..NONE };
const PLAIN: CardProperties = CardProperties { plain_ribbon: true, ..NONE };
const PI: CardProperties = CardProperties { pi: 1, ..NONE };
const DOUBLE_PI: CardProperties = CardProperties { pi: 2, ..NONE };
const BONUS_DOUBLE: CardProperties = CardProperties { pi: 2, bonus: true, ..NONE };
const BONUS_TRIPLE: CardProperties = CardProperties { pi: 3, bonus: true, ..NONE };

#[rustfmt::skip]
static TABLE: [CardProperties; Card::COUNT] = [
    BRIGHT,     RED,          PI,    PI,        // Jan
    BIRD,       RED,          PI,    PI,        // Feb
    BRIGHT,     RED,          PI,    PI,        // Mar
    BIRD,       PLAIN,        PI,    PI,        // Apr
    ANIMAL,     PLAIN,        PI,    PI,        // May
    ANIMAL,     BLUE,         PI,    PI,        // Jun
    ANIMAL,     PLAIN,        PI,    PI,        // Jul
    BRIGHT,     BIRD,         PI,    PI,        // Aug
    ANIMAL,     BLUE,         PI,    PI,        // Sep
    ANIMAL,     BLUE,         PI,    PI,        // Oct
    BRIGHT,     DOUBLE_PI,    PI,    PI,        // Nov
    SUB_BRIGHT, ANIMAL,       PLAIN, DOUBLE_PI, // Dec
    BONUS_DOUBLE, BONUS_DOUBLE, BONUS_TRIPLE,
];

pub(crate) fn props(card: Card) -> &'static CardProperties {
    &TABLE[card.code() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(pred: impl Fn(Card) -> bool) -> usize {
        Card::ALL.iter().filter(|c| pred(**c)).count()
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(count(Card::is_bright), 5);
        assert_eq!(count(Card::is_sub_bright), 1);
        assert_eq!(count(Card::is_animal), 9);
        assert_eq!(count(Card::is_bird), 3);
        assert_eq!(count(Card::is_red_ribbon), 3);
        assert_eq!(count(Card::is_blue_ribbon), 3);
        assert_eq!(count(Card::is_plain_ribbon), 4);
        assert_eq!(count(Card::is_ribbon), 10);
        assert_eq!(count(Card::is_bonus), 3);
    }

    #[test]
    fn test_specific_cards() {
        assert!(Card::DecBright.is_bright() && Card::DecBright.is_sub_bright());
        assert!(!Card::NovBright.is_sub_bright());
        assert!(Card::AugBird.is_bird() && Card::AugBird.is_animal());
        assert!(Card::SepCup.is_animal() && !Card::SepCup.is_bright());
        assert!(Card::DecRibbon.is_plain_ribbon());
    }

    #[test]
    fn test_pi_values() {
        assert_eq!(Card::JanPi1.pi_value(), 1);
        assert_eq!(Card::NovDoublePi.pi_value(), 2);
        assert_eq!(Card::DecDoublePi.pi_value(), 2);
        assert_eq!(Card::BonusDouble1.pi_value(), 2);
        assert_eq!(Card::BonusTriple.pi_value(), 3);
        assert_eq!(Card::JanBright.pi_value(), 0);

        let total: u32 = Card::ALL.iter().map(|c| c.pi_value() as u32).sum();
        // 22 single pi + 2 month doubles + 2 bonus doubles + 1 bonus triple
        assert_eq!(total, 22 + 4 + 4 + 3);
    }

    #[test]
    fn test_every_month_card_has_one_category() {
        for card in &Card::ALL[..Card::MONTH_CARDS] {
            let p = card.properties();
            let kinds = [p.bright, p.animal, card.is_ribbon(), p.pi > 0];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{card}");
        }
    }
}
