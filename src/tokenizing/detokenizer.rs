//! Detokenizer: rebuild submission text from words and space counts
//!
//! The inverse of the grouping transformation. Reconstruction from raw
//! matrices is the one fallible operation in the crate: its correctness
//! depends on an externally supplied pairing rather than on its own
//! input, so an incompatible pair is reported instead of being truncated
//! or padded. The caller decides whether to pad, truncate, or abort.

use std::fmt;

use crate::tokenizing::line::SpacedLine;
use crate::{SpaceMatrix, WordMatrix};

/// A word matrix and space matrix that cannot be paired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    /// The matrices disagree on how many lines the submission has.
    LineCountMismatch {
        word_lines: usize,
        space_lines: usize,
    },
    /// A line's space list does not hold exactly one more entry than its
    /// word list.
    ShapeMismatch {
        line: usize,
        word_count: usize,
        space_count: usize,
    },
}

impl std::error::Error for ReconstructError {}

impl fmt::Display for ReconstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructError::LineCountMismatch {
                word_lines,
                space_lines,
            } => write!(
                f,
                "word matrix has {} lines but space matrix has {}",
                word_lines, space_lines
            ),
            ReconstructError::ShapeMismatch {
                line,
                word_count,
                space_count,
            } => write!(
                f,
                "line {}: {} words need {} space entries, got {}",
                line,
                word_count,
                word_count + 1,
                space_count
            ),
        }
    }
}

/// Rebuild a submission from a word matrix and its paired space matrix.
///
/// Each line is emitted as `spaces[i][0]` spaces, `words[i][0]`,
/// `spaces[i][1]` spaces, and so on, ending with the trailing run after
/// the last word; lines are joined with `\n`. The word matrix may come
/// from a different source than the space matrix (edited words laid out
/// with the original spacing), as long as the shapes agree.
pub fn recreate_student_file(
    words: &WordMatrix,
    spaces: &SpaceMatrix,
) -> Result<String, ReconstructError> {
    if words.len() != spaces.len() {
        return Err(ReconstructError::LineCountMismatch {
            word_lines: words.len(),
            space_lines: spaces.len(),
        });
    }

    let mut lines = Vec::with_capacity(words.len());
    for (index, (line_words, line_spaces)) in words.iter().zip(spaces).enumerate() {
        if line_words.len() + 1 != line_spaces.len() {
            return Err(ReconstructError::ShapeMismatch {
                line: index,
                word_count: line_words.len(),
                space_count: line_spaces.len(),
            });
        }
        let mut out = " ".repeat(line_spaces[0]);
        for (word, run) in line_words.iter().zip(&line_spaces[1..]) {
            out.push_str(word);
            out.extend(std::iter::repeat(' ').take(*run));
        }
        lines.push(out);
    }

    Ok(lines.join("\n"))
}

/// Rebuild text from spaced lines. Infallible: the shape invariant holds
/// by construction.
pub fn render_lines(lines: &[SpacedLine]) -> String {
    lines
        .iter()
        .map(SpacedLine::render)
        .collect::<Vec<_>>()
        .join("\n")
}
