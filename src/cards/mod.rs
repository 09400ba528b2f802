//! Card system: identities, categories, and the deck.
//!
//! ## Key Types
//!
//! - `Card`: one of the 51 cards (48 month cards + 3 bonus cards)
//! - `Month`: validated month number 1-12
//! - `CardProperties`: static category row for a card
//!
//! Categories are looked up in a fixed table rather than computed, so the
//! scoring rules only ever see flags and pi weights.

pub mod card;
pub mod deck;
pub mod properties;

pub use card::{Card, Month};
pub use deck::{full_deck, is_complete_deck, shuffled_deck};
pub use properties::CardProperties;
