//! Grouping transformation: raw tokens into spaced lines
//!
//! Scans the token stream left to right, emitting one [`SpacedLine`] per
//! line. Each word is preceded in the space list by the run length before
//! it (0 when it abuts the previous word or the start of line), and every
//! line ends with the trailing run length (0 when it ends with a word).

use crate::tokenizing::line::SpacedLine;
use crate::tokenizing::tokens::Token;

/// Group a raw token stream into one [`SpacedLine`] per line.
///
/// A trailing empty line produced by a final newline token is dropped,
/// matching the line-splitting policy of the cleaning module. Interior
/// empty lines are preserved as zero-word lines.
pub fn group_spaced_lines(tokens: Vec<Token>) -> Vec<SpacedLine> {
    let mut lines = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut spaces: Vec<usize> = Vec::new();
    let mut run = 0usize;

    for token in tokens {
        match token {
            Token::Spaces(n) => run = n,
            Token::Word(word) => {
                spaces.push(run);
                run = 0;
                words.push(word);
            }
            Token::Newline => {
                spaces.push(run);
                run = 0;
                lines.push(SpacedLine::from_raw(
                    std::mem::take(&mut words),
                    std::mem::take(&mut spaces),
                ));
            }
        }
    }

    // Text not ending in a newline still owes its last line; text that
    // does end in one owes nothing (the phantom line after it is dropped).
    if !words.is_empty() || run > 0 {
        spaces.push(run);
        lines.push(SpacedLine::from_raw(words, spaces));
    }

    lines
}
