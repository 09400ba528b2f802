//! Category counts over a set of captured cards.

use crate::cards::Card;

/// How many captured cards fall in each scoring category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryTally {
    /// Sum of pi weights.
    pub pi: u32,
    pub bright: u32,
    /// The December bright is among the brights.
    pub has_sub_bright: bool,
    pub animal: u32,
    pub bird: u32,
    pub ribbon: u32,
    pub red_ribbon: u32,
    pub blue_ribbon: u32,
    pub plain_ribbon: u32,
}

impl CategoryTally {
    /// Count categories over `cards`.
    ///
    /// With `kukjin_as_double_pi`, the September cup counts as two pi
    /// instead of an animal.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, kukjin_as_double_pi: bool) -> Self {
        let mut tally = Self::default();
        let mut has_cup = false;

        for card in cards {
            let p = card.properties();
            tally.pi += u32::from(p.pi);
            tally.bright += u32::from(p.bright);
            tally.has_sub_bright |= p.sub_bright;
            tally.animal += u32::from(p.animal);
            tally.bird += u32::from(p.bird);
            tally.red_ribbon += u32::from(p.red_ribbon);
            tally.blue_ribbon += u32::from(p.blue_ribbon);
            tally.plain_ribbon += u32::from(p.plain_ribbon);
            has_cup |= card == Card::SepCup;
        }
        tally.ribbon = tally.red_ribbon + tally.blue_ribbon + tally.plain_ribbon;

        if kukjin_as_double_pi && has_cup {
            tally.pi += 2;
            tally.animal -= 1;
        }

        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(CategoryTally::from_cards([], false), CategoryTally::default());
    }

    #[test]
    fn test_counts() {
        let tally = CategoryTally::from_cards(
            [
                Card::JanBright,
                Card::DecBright,
                Card::FebBird,
                Card::MayBridge,
                Card::JanRedRibbon,
                Card::JunBlueRibbon,
                Card::DecRibbon,
                Card::NovDoublePi,
                Card::JanPi1,
                Card::BonusTriple,
            ],
            false,
        );

        assert_eq!(tally.bright, 2);
        assert!(tally.has_sub_bright);
        assert_eq!(tally.animal, 2);
        assert_eq!(tally.bird, 1);
        assert_eq!(tally.ribbon, 3);
        assert_eq!(tally.red_ribbon, 1);
        assert_eq!(tally.blue_ribbon, 1);
        assert_eq!(tally.plain_ribbon, 1);
        assert_eq!(tally.pi, 2 + 1 + 3);
    }

    #[test]
    fn test_kukjin_moves_cup_to_pi() {
        let cards = [Card::SepCup, Card::OctDeer, Card::SepPi1];

        let plain = CategoryTally::from_cards(cards, false);
        assert_eq!((plain.animal, plain.pi), (2, 1));

        let kukjin = CategoryTally::from_cards(cards, true);
        assert_eq!((kukjin.animal, kukjin.pi), (1, 3));
    }

    #[test]
    fn test_kukjin_without_cup_changes_nothing() {
        let cards = [Card::OctDeer, Card::SepPi1];
        assert_eq!(
            CategoryTally::from_cards(cards, true),
            CategoryTally::from_cards(cards, false)
        );
    }
}
