//! Classification of postfix tokens.
//!
//! A token is one whitespace-separated word of the input. It is valid if it is exactly one of:
//!
//! - a **number**: a run of ASCII digits, such as `0` or `144`;
//! - a **variable**: an ASCII letter followed by ASCII letters or digits, such as `x` or `rate2`;
//! - an **operator**: one of `+`, `-`, or `*`.
//!
//! The predicates lex the token with the same [`logos`] lexer the tree builder uses, and accept it
//! only if the whole token is a single lexeme of the right kind, so classification can never
//! disagree with tokenization.

use crate::{node::BinOp, tokenizer::{tokenize, TokenKind}};

/// The class of a valid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// An integer constant.
    Number,

    /// A named variable.
    Variable,

    /// A binary operator.
    Operator(BinOp),
}

impl TokenClass {
    /// Returns the class of a token of the given kind, if tokens of that kind are valid.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Int => Some(Self::Number),
            TokenKind::Name => Some(Self::Variable),
            TokenKind::Add => Some(Self::Operator(BinOp::Add)),
            TokenKind::Sub => Some(Self::Operator(BinOp::Sub)),
            TokenKind::Mul => Some(Self::Operator(BinOp::Mul)),
            TokenKind::Whitespace | TokenKind::Symbol => None,
        }
    }
}

/// Lexes the token, returning its kind if the whole token is exactly one lexeme.
fn single_kind(token: &str) -> Option<TokenKind> {
    let mut lexer = tokenize(token);
    let kind = lexer.next()?.ok()?;
    (lexer.span() == (0..token.len()) && lexer.next().is_none()).then_some(kind)
}

/// Returns the class of the token, or [`None`] if it is not a valid token.
pub fn classify(token: &str) -> Option<TokenClass> {
    single_kind(token).and_then(TokenClass::from_kind)
}

/// Returns true if the token is non-empty and made of ASCII digits only.
pub fn is_number(token: &str) -> bool {
    classify(token) == Some(TokenClass::Number)
}

/// Returns true if the token is non-empty, starts with an ASCII letter, and the rest are ASCII
/// letters or digits.
pub fn is_variable(token: &str) -> bool {
    classify(token) == Some(TokenClass::Variable)
}

/// Returns true if the token is `+`, `-`, or `*`.
pub fn is_operator(token: &str) -> bool {
    matches!(classify(token), Some(TokenClass::Operator(_)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn numbers() {
        assert!(is_number("0"));
        assert!(is_number("0042"));
        assert!(is_number("123456789012345678901234567890"));
        assert!(!is_number(""));
        assert!(!is_number("-3"));
        assert!(!is_number("3x"));
        assert!(!is_number("1.5"));
        assert!(!is_number(" 3"));
    }

    #[test]
    fn variables() {
        assert!(is_variable("x"));
        assert!(is_variable("Rate2b"));
        assert!(!is_variable(""));
        assert!(!is_variable("2x"));
        assert!(!is_variable("x_1"));
        assert!(!is_variable("é"));
        assert!(!is_variable("x y"));
    }

    #[test]
    fn operators() {
        assert!(is_operator("+"));
        assert!(is_operator("-"));
        assert!(is_operator("*"));
        assert!(!is_operator("/"));
        assert!(!is_operator("++"));
        assert!(!is_operator("-1"));
        assert!(!is_operator(""));
    }

    #[test]
    fn mutually_exclusive() {
        for token in ["7", "y", "+", "-", "*", "7y", "?", ""] {
            let hits = [is_number(token), is_variable(token), is_operator(token)]
                .into_iter()
                .filter(|&hit| hit)
                .count();
            assert!(hits <= 1, "`{}` matched {} classes", token, hits);
        }
    }

    #[test]
    fn classes() {
        assert_eq!(classify("12"), Some(TokenClass::Number));
        assert_eq!(classify("ab"), Some(TokenClass::Variable));
        assert_eq!(classify("-"), Some(TokenClass::Operator(BinOp::Sub)));
        assert_eq!(classify("%"), None);
    }
}
