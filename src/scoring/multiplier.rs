//! Multiplier stacking.
//!
//! Applied in a fixed order to the base score:
//!
//! 1. go bonus: +1 for one go, +2 for two, x2^(gos - 2) beyond that
//! 2. x2 when seven or more animals were captured
//! 3. x2 per shake
//! 4. x2 per bomb
//!
//! The go bonus is additive for one and two gos and multiplicative from
//! three on; both halves are part of the rule.

/// Animal count that doubles the score.
pub const ANIMAL_DOUBLE: u32 = 7;

/// Counters that amplify a score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Multipliers {
    pub go_cnt: u32,
    pub shake_cnt: u32,
    pub bomb_cnt: u32,
    /// Captured animals, after any kukjin adjustment.
    pub animal: u32,
}

fn doubled(score: u32, times: u32) -> u32 {
    score.saturating_mul(2u32.saturating_pow(times))
}

/// Apply the go bonus.
#[must_use]
pub fn apply_go(score: u32, go_cnt: u32) -> u32 {
    match go_cnt {
        0 => score,
        1 => score + 1,
        2 => score + 2,
        n => doubled(score, n - 2),
    }
}

/// Apply every multiplier in order.
#[must_use]
pub fn amplify(base: u32, m: &Multipliers) -> u32 {
    let mut score = apply_go(base, m.go_cnt);
    if m.animal >= ANIMAL_DOUBLE {
        score = doubled(score, 1);
    }
    score = doubled(score, m.shake_cnt);
    doubled(score, m.bomb_cnt)
}
