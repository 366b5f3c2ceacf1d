//! Cleaning module: line-terminator normalization and lossy conversions
//!
//! Raw submissions arrive with mixed line endings and irregular spacing.
//! This module reduces terminators to `\n` and converts between the raw
//! string, line matrix, and word matrix views. The word-level conversions
//! here discard spacing; use the `tokenizing` module when the original
//! layout has to be reconstructable.

pub mod conversions;
pub mod options;

pub use conversions::{
    clean, lines_to_string, lines_to_words, string_to_lines, string_to_words,
    string_to_words_limit_line_length, words_to_lines, words_to_string, WORD_LIMIT_PER_LINE,
};
pub use options::LineOptions;
