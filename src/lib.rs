//! # cleanse
//!
//! Normalization and tokenization of free-form text submissions for a
//! grading pipeline. A submission is cleaned once (line terminators reduced
//! to `\n`), then converted between three views of the same content:
//!
//! 1. Raw text
//! 2. A line matrix (one `String` per line)
//! 3. A word matrix (one `Vec<String>` of space-delimited words per line)
//!
//! The [`cleaning`] module holds the lossy conversions used where exact
//! layout does not matter. The [`tokenizing`] module is the lossless
//! sibling: it records the space runs bracketing every word so that the
//! original layout can be rebuilt byte-for-byte — including after the
//! grading layer has edited individual words. The [`classifying`] module
//! carries the small token predicates the comparison logic needs.
//!
//! This crate performs no I/O and makes no grading decisions; it only
//! reshapes text. All operations are pure and total except matrix
//! reconstruction, which fails when handed matrices that cannot be paired
//! (see [`ReconstructError`]).

pub mod classifying;
pub mod cleaning;
pub mod tokenizing;

/// An ordered sequence of text lines.
pub type LineMatrix = Vec<String>;

/// An ordered sequence of lines, each an ordered sequence of words.
pub type WordMatrix = Vec<Vec<String>>;

/// An ordered sequence of lines, each the space-run lengths bracketing that
/// line's words. Every inner sequence has exactly one more entry than the
/// corresponding word list.
pub type SpaceMatrix = Vec<Vec<usize>>;

pub use classifying::{
    is_number, isolate_alphanum_and_number_punctuation, white_space_lists_equal,
};
pub use cleaning::{
    clean, lines_to_string, lines_to_words, string_to_lines, string_to_words,
    string_to_words_limit_line_length, words_to_lines, words_to_string, LineOptions,
};
pub use tokenizing::{
    recreate_student_file, render_lines, string_to_spaced_lines, string_to_words_and_space_list,
    ReconstructError, SpacedLine,
};
