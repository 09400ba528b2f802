//! Error types.
//!
//! Every rejection the engine can produce is local and recoverable: the
//! state machine does not move, and the host re-prompts.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;
use super::state::GameStatus;
use crate::cards::{Card, Month};

/// Why an action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The match has already ended.
    #[error("the game is over")]
    GameOver,

    /// The action does not answer the pending question.
    #[error("{action:?} does not answer the {status:?} question")]
    UnexpectedAction { status: GameStatus, action: Action },

    /// The card is not in the current player's hand.
    #[error("{0} is not in the current player's hand")]
    CardNotHeld(Card),

    /// A bomb-token throw with no tokens left.
    #[error("no bomb tokens left")]
    NoBombTokens,

    /// A bomb token cannot carry a shake or bomb declaration.
    #[error("a bomb token cannot declare a shake or bomb")]
    DeclarationOnToken,

    /// The card's month supports neither a shake nor a bomb.
    #[error("cannot shake or bomb with {0}")]
    IllegalDeclaration(Card),

    /// The chosen card is not one of the offered pairings.
    #[error("{0} is not a capture candidate")]
    NotACandidate(Card),
}

/// Why a stacked deck could not be dealt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck is not a permutation of the 51 cards.
    #[error("the deck is not a permutation of the full card set")]
    IncompleteDeck,

    /// The deal holds a president that the redeal policy discards.
    /// `holder` is `None` for a board president.
    #[error("president of {month} in the deal (holder: {holder:?})")]
    President { month: Month, holder: Option<PlayerId> },
}

/// A broken card-conservation invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A card is in more than one place.
    #[error("{card} is held in {count} places")]
    Duplicated { card: Card, count: usize },

    /// A card is nowhere.
    #[error("{0} is missing")]
    Missing(Card),

    /// A shaken card is not in its owner's hand.
    #[error("{player} has {card} shaken but not in hand")]
    ShakenNotHeld { player: PlayerId, card: Card },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ActionError::CardNotHeld(Card::JanPi1).to_string(),
            "JanPi1 is not in the current player's hand"
        );
        assert_eq!(
            DealError::President { month: Month::new(1).unwrap(), holder: None }.to_string(),
            "president of Jan in the deal (holder: None)"
        );
        assert_eq!(
            InvariantViolation::Duplicated { card: Card::MayPi2, count: 2 }.to_string(),
            "MayPi2 is held in 2 places"
        );
    }
}
