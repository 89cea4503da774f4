//! Letter statistics and word lookup.

pub mod dictionary;
pub mod letters;

pub use dictionary::{Dictionary, WordSet};
pub use letters::{draw_letter, letter_for_roll, letter_points, ALPHABET, FREQ, POINTS};
