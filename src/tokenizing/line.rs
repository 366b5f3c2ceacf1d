//! Line structure pairing words with their bracketing space counts

use serde::Serialize;

/// One line of a submission: its words and the space-run lengths
/// bracketing them.
///
/// `spaces` always holds exactly one more entry than `words`: the run
/// before the first word (possibly 0), between each pair of words, and
/// after the last word. A fully empty line is zero words with spaces
/// `[0]`; an all-spaces line is zero words with a single entry holding
/// the run length.
///
/// The fields are private and instances are only built by the grouping
/// transformation, so the shape invariant holds by construction and
/// [`render`](SpacedLine::render) cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpacedLine {
    words: Vec<String>,
    spaces: Vec<usize>,
}

impl SpacedLine {
    pub(crate) fn from_raw(words: Vec<String>, spaces: Vec<usize>) -> Self {
        debug_assert_eq!(spaces.len(), words.len() + 1);
        SpacedLine { words, spaces }
    }

    /// The line's words, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The space-run lengths bracketing the words.
    pub fn spaces(&self) -> &[usize] {
        &self.spaces
    }

    /// Rebuild the line's original text.
    pub fn render(&self) -> String {
        let mut out = " ".repeat(self.spaces[0]);
        for (word, run) in self.words.iter().zip(&self.spaces[1..]) {
            out.push_str(word);
            out.extend(std::iter::repeat(' ').take(*run));
        }
        out
    }

    /// Consume the line into its word and space vectors.
    pub fn into_parts(self) -> (Vec<String>, Vec<usize>) {
        (self.words, self.spaces)
    }
}
