//! Base-score breakpoints.
//!
//! | category | condition | points |
//! |---|---|---|
//! | pi | total >= 10 | total - 9 |
//! | animal | 5-7 | count - 4 |
//! | animal | > 7 | 3 |
//! | bird | == 3 | 5 |
//! | ribbon | >= 5 | count - 4 |
//! | bright | 3 without sub-bright | 3 |
//! | bright | 3 with sub-bright | 2 |
//! | bright | 4 | 4 |
//! | bright | 5 | 15 |
//! | red ribbon | == 3 | 3 |
//! | blue ribbon | == 3 | 3 |
//! | plain ribbon | >= 3 | 3 |

use super::tally::CategoryTally;

/// Flat score of a claimed president.
pub const PRESIDENT_SCORE: u32 = 7;

pub const PI_THRESHOLD: u32 = 10;
pub const ANIMAL_THRESHOLD: u32 = 5;
pub const ANIMAL_CAP: u32 = 7;
pub const ANIMAL_CAPPED_POINTS: u32 = 3;
pub const BIRD_SET: u32 = 3;
pub const BIRD_POINTS: u32 = 5;
pub const RIBBON_THRESHOLD: u32 = 5;
pub const RIBBON_SET: u32 = 3;
pub const RIBBON_SET_POINTS: u32 = 3;

/// Points for 0..=5 brights, without and with the sub-bright.
const BRIGHT_POINTS: [[u32; 2]; 6] = [[0, 0], [0, 0], [0, 0], [3, 2], [4, 4], [15, 15]];

/// Pi points: one per pi from the tenth on.
#[must_use]
pub fn pi_points(pi: u32) -> u32 {
    if pi >= PI_THRESHOLD { pi - (PI_THRESHOLD - 1) } else { 0 }
}

#[must_use]
pub fn animal_points(animal: u32) -> u32 {
    match animal {
        a if a > ANIMAL_CAP => ANIMAL_CAPPED_POINTS,
        a if a >= ANIMAL_THRESHOLD => a - (ANIMAL_THRESHOLD - 1),
        _ => 0,
    }
}

#[must_use]
pub fn bird_points(bird: u32) -> u32 {
    if bird == BIRD_SET { BIRD_POINTS } else { 0 }
}

#[must_use]
pub fn ribbon_points(ribbon: u32) -> u32 {
    if ribbon >= RIBBON_THRESHOLD { ribbon - (RIBBON_THRESHOLD - 1) } else { 0 }
}

#[must_use]
pub fn bright_points(bright: u32, has_sub_bright: bool) -> u32 {
    BRIGHT_POINTS
        .get(bright as usize)
        .map_or(0, |row| row[usize::from(has_sub_bright)])
}

/// Red and blue need the full set of three; plain needs any three.
#[must_use]
pub fn ribbon_set_points(tally: &CategoryTally) -> u32 {
    let red = tally.red_ribbon == RIBBON_SET;
    let blue = tally.blue_ribbon == RIBBON_SET;
    let plain = tally.plain_ribbon >= RIBBON_SET;
    [red, blue, plain]
        .iter()
        .filter(|hit| **hit)
        .count() as u32
        * RIBBON_SET_POINTS
}

/// Sum of every category's points, before multipliers.
#[must_use]
pub fn base_score(tally: &CategoryTally) -> u32 {
    pi_points(tally.pi)
        + animal_points(tally.animal)
        + bird_points(tally.bird)
        + ribbon_points(tally.ribbon)
        + bright_points(tally.bright, tally.has_sub_bright)
        + ribbon_set_points(tally)
}
