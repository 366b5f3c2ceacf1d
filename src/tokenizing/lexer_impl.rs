//! Raw tokenization for the space-preserving tokenizer
//!
//! The actual tokenization is handled entirely by logos; grouping into
//! per-line structures is applied afterwards by the transformations
//! module.

use crate::tokenizing::tokens::Token;
use logos::Logos;

/// Tokenize text into its raw token stream.
///
/// The token set covers every character, so no input is skipped.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source).flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words_and_spaces() {
        let tokens = tokenize("a  b");
        assert_eq!(
            tokens,
            vec![
                Token::Word("a".to_string()),
                Token::Spaces(2),
                Token::Word("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_lines() {
        let tokens = tokenize(" x\n\ny ");
        assert_eq!(
            tokens,
            vec![
                Token::Spaces(1),
                Token::Word("x".to_string()),
                Token::Newline,
                Token::Newline,
                Token::Word("y".to_string()),
                Token::Spaces(1),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }
}
