//! Game events.
//!
//! Every card movement inside a state transition is recorded as a
//! `GameEvent`. Hosts read or drain the log to animate a table or write
//! a transcript; the engine itself never reads it back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Card, Month};

/// Cards moved together by one capture.
pub type CardBatch = SmallVec<[Card; 4]>;

/// Something that happened during a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A president was offered and answered.
    President { player: PlayerId, month: Month, claimed: bool },

    /// A card left the hand.
    Thrown { player: PlayerId, card: Card },

    /// A bomb token was spent in place of a card.
    BombTokenSpent { player: PlayerId },

    /// A three-card month was shaken.
    Shaken { player: PlayerId, month: Month },

    /// A bomb took a whole month at once.
    Bombed { player: PlayerId, month: Month, cards: CardBatch },

    /// A card was turned up from the stock.
    Drawn { player: PlayerId, card: Card },

    /// A card was laid on an empty pile.
    Placed { player: PlayerId, card: Card },

    /// Cards moved from the board to the player's captures.
    Captured { player: PlayerId, cards: CardBatch },

    /// A three-card pile was swept.
    Swept { player: PlayerId, month: Month, cards: CardBatch },

    /// A same-month turn left all three cards on the board.
    Stacked { player: PlayerId, month: Month },

    /// A bonus card went to the player's captures.
    BonusCollected { player: PlayerId, card: Card },

    /// One pi card changed hands.
    PiTransferred { from: PlayerId, to: PlayerId, card: Card },

    /// The player chose to continue.
    Go { player: PlayerId, go_count: u32, score: u32 },

    /// The player stopped and won.
    Stopped { player: PlayerId, score: u32 },

    /// The match ended without a winner.
    Exhausted,
}

impl GameEvent {
    /// The player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::President { player, .. }
            | GameEvent::Thrown { player, .. }
            | GameEvent::BombTokenSpent { player }
            | GameEvent::Shaken { player, .. }
            | GameEvent::Bombed { player, .. }
            | GameEvent::Drawn { player, .. }
            | GameEvent::Placed { player, .. }
            | GameEvent::Captured { player, .. }
            | GameEvent::Swept { player, .. }
            | GameEvent::Stacked { player, .. }
            | GameEvent::BonusCollected { player, .. }
            | GameEvent::Go { player, .. }
            | GameEvent::Stopped { player, .. } => Some(*player),
            GameEvent::PiTransferred { to, .. } => Some(*to),
            GameEvent::Exhausted => None,
        }
    }
}
