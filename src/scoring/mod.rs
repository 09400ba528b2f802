//! Scoring: category tallies, base-score breakpoints, and multipliers.
//!
//! ## Pipeline
//!
//! 1. [`CategoryTally::from_cards`] counts captured cards per category.
//! 2. [`base_score`] applies the breakpoint table.
//! 3. [`amplify`] stacks go, animal, shake and bomb multipliers.
//!
//! A claimed president bypasses all of this with [`PRESIDENT_SCORE`].

pub mod multiplier;
pub mod table;
pub mod tally;

pub use multiplier::{amplify, apply_go, Multipliers};
pub use table::{base_score, PRESIDENT_SCORE};
pub use tally::CategoryTally;
