//! Token definitions for the space-preserving tokenizer
//!
//! Three lexemes cover every input character, so the lexer is total: a run
//! of spaces (carrying its length), a newline, and a word (a maximal run
//! of anything else). Tabs and other control characters are word
//! characters here; only the space character separates words.

use logos::Logos;

/// Raw tokens of a submission's text.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A maximal run of space characters, by length.
    #[regex(r" +", |lex| lex.slice().len())]
    Spaces(usize),

    /// A line terminator (already normalized to `\n`).
    #[token("\n")]
    Newline,

    /// A maximal run of non-space, non-newline characters.
    #[regex(r"[^ \n]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// Check if this token is a space run.
    pub fn is_spaces(&self) -> bool {
        matches!(self, Token::Spaces(_))
    }

    /// Check if this token is a word.
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}
