//! Game configuration.
//!
//! `GameConfig` carries the table size and the house rules a match is
//! played under. Deal sizes and the go threshold are derived from the
//! player count unless overridden.

use serde::{Deserialize, Serialize};

/// Which dealt presidents (four cards of one month) force a redeal.
///
/// A president on the board always forces a redeal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresidentRedeal {
    /// Redeal if the board or any hand holds all four cards of a month.
    #[default]
    BoardAndHands,
    /// Redeal only for a board president; hand presidents are offered to
    /// the holder as a president claim.
    BoardOnly,
}

/// Complete match configuration.
///
/// ```
/// use gostop::core::{GameConfig, PresidentRedeal};
///
/// let config = GameConfig::new(3)
///     .with_president_redeal(PresidentRedeal::BoardOnly)
///     .with_go_threshold(5);
///
/// assert_eq!(config.hand_size(), 7);
/// assert_eq!(config.board_size(), 6);
/// assert_eq!(config.go_threshold(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2 or 3).
    pub player_count: usize,

    /// Minimum unamplified score before a player may go or stop.
    /// `None` uses the table default (7 for two players, 3 for three).
    #[serde(default)]
    pub go_threshold: Option<u32>,

    /// Redeal policy for presidents in the initial deal.
    #[serde(default)]
    pub president_redeal: PresidentRedeal,

    /// Count the September cup as a double pi instead of an animal.
    #[serde(default)]
    pub kukjin_as_double_pi: bool,
}

impl GameConfig {
    /// Create a configuration with default house rules.
    ///
    /// Panics unless `player_count` is 2 or 3.
    pub fn new(player_count: usize) -> Self {
        assert!(
            matches!(player_count, 2 | 3),
            "Player count must be 2 or 3, got {player_count}"
        );

        Self {
            player_count,
            go_threshold: None,
            president_redeal: PresidentRedeal::default(),
            kukjin_as_double_pi: false,
        }
    }

    /// Override the go threshold.
    #[must_use]
    pub fn with_go_threshold(mut self, threshold: u32) -> Self {
        self.go_threshold = Some(threshold);
        self
    }

    /// Set the president redeal policy.
    #[must_use]
    pub fn with_president_redeal(mut self, policy: PresidentRedeal) -> Self {
        self.president_redeal = policy;
        self
    }

    /// Enable or disable the kukjin double-pi rule.
    #[must_use]
    pub fn with_kukjin_as_double_pi(mut self, enabled: bool) -> Self {
        self.kukjin_as_double_pi = enabled;
        self
    }

    /// Cards dealt to each hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        if self.player_count == 2 { 10 } else { 7 }
    }

    /// Cards dealt face-up to the board (before bonus cards are stripped).
    #[must_use]
    pub fn board_size(&self) -> usize {
        if self.player_count == 2 { 8 } else { 6 }
    }

    /// Effective go threshold.
    #[must_use]
    pub fn go_threshold(&self) -> u32 {
        self.go_threshold
            .unwrap_or(if self.player_count == 2 { 7 } else { 3 })
    }

    /// Panics if the configuration was built by hand with a bad table size.
    pub(crate) fn validate(&self) {
        assert!(
            matches!(self.player_count, 2 | 3),
            "Player count must be 2 or 3, got {}",
            self.player_count
        );
    }
}
