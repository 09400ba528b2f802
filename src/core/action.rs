//! Action payloads and history records.
//!
//! The engine asks one question at a time; an `Action` is the answer. Which
//! variant is accepted depends on the current [`GameStatus`]:
//!
//! | status | accepted action |
//! |---|---|
//! | `AskPresident` | `Go { go }` |
//! | `AskCardToThrow` | `Throw { card, shake_or_bomb }` |
//! | `AskCardToCapture` | `Capture { card }` or `Stack { stack }` |
//! | `AskGoStop` | `Go { go }` |
//!
//! [`GameStatus`]: super::state::GameStatus

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// An answer to the engine's pending question.
///
/// ```
/// use gostop::cards::Card;
/// use gostop::core::Action;
///
/// // Throw a card without declaring anything
/// let throw = Action::throw(Card::JanPi1);
///
/// // Spend a bomb token instead of throwing from hand
/// let token = Action::bomb_token();
///
/// assert_ne!(throw, token);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Continue (`true`) or stop (`false`) after a president or a scoring turn.
    Go { go: bool },

    /// Throw a card from hand. `card: None` spends a bomb token.
    /// `shake_or_bomb` declares a shake or a bomb on the card's month.
    Throw { card: Option<Card>, shake_or_bomb: bool },

    /// Pick which of two same-month board cards to pair with.
    Capture { card: Card },

    /// Same-month precedence: `true` leaves all three cards on the board,
    /// `false` keeps the thrown pair captured.
    Stack { stack: bool },
}

impl Action {
    /// Plain throw of a card.
    #[must_use]
    pub const fn throw(card: Card) -> Self {
        Action::Throw { card: Some(card), shake_or_bomb: false }
    }

    /// Throw a card declaring a shake or bomb.
    #[must_use]
    pub const fn declare(card: Card) -> Self {
        Action::Throw { card: Some(card), shake_or_bomb: true }
    }

    /// Spend a bomb token.
    #[must_use]
    pub const fn bomb_token() -> Self {
        Action::Throw { card: None, shake_or_bomb: false }
    }
}

/// An accepted action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Global sequence number (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Action::throw(Card::MarPi1),
            Action::Throw { card: Some(Card::MarPi1), shake_or_bomb: false }
        );
        assert_eq!(
            Action::declare(Card::MarPi1),
            Action::Throw { card: Some(Card::MarPi1), shake_or_bomb: true }
        );
        assert_eq!(Action::bomb_token(), Action::Throw { card: None, shake_or_bomb: false });
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Throw { card: None, shake_or_bomb: false };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(1), Action::Go { go: true }, 3, 12);

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.action, Action::Go { go: true });
        assert_eq!(record.round, 3);
        assert_eq!(record.sequence, 12);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
