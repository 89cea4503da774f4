//! Letter statistics: spawn frequencies and point values.
//!
//! `FREQ` is a cumulative frequency table over `ALPHABET`, built from
//! English letter counts. A uniform roll in `[0, FREQ[25])` selects the
//! first letter whose threshold exceeds the roll, so common letters spawn
//! often and rare ones seldom. Point values follow the familiar Scrabble
//! scale: cheap vowels, expensive `q` and `z`.

use crate::core::GameRng;

/// Letters in draw order, aligned with `FREQ` and `POINTS`.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Cumulative spawn-frequency thresholds, strictly increasing.
pub const FREQ: [u32; 26] = [
    4467, 5629, 7175, 8574, 12829, 13490, 14592, 15915, 18496, 18659, 19541, 21909, 23210, 25424,
    28225, 29518, 29602, 32645, 35028, 37409, 39290, 39756, 40441, 40630, 42235, 42485,
];

/// Point value of each letter, aligned with `ALPHABET`.
pub const POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Draw a letter with frequency-weighted probability.
#[must_use]
pub fn draw_letter(rng: &mut GameRng) -> char {
    letter_for_roll(rng.gen_range_u32(0..FREQ[25]))
}

/// The letter a raw roll selects: the first whose cumulative threshold
/// exceeds the roll. Rolls at or beyond the table maximum saturate to `z`.
#[must_use]
pub fn letter_for_roll(roll: u32) -> char {
    let idx = FREQ.partition_point(|&threshold| threshold <= roll);
    ALPHABET[idx.min(ALPHABET.len() - 1)]
}

/// Point value of a letter. Zero for anything outside `a..=z`.
#[must_use]
pub fn letter_points(letter: char) -> u32 {
    match letter {
        'a'..='z' => POINTS[(letter as u8 - b'a') as usize],
        _ => 0,
    }
}
