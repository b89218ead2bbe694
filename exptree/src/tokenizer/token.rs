use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r\x0B\x0C]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Name,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A maximal run of non-whitespace source text.
///
/// Postfix input is split on whitespace only, so a word can be made of more than one token
/// (`3x` is the tokens `3` and `x`). Such a word is not a valid operand or operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Word<'source> {
    /// The region of the source code that this word originated from.
    pub span: Range<usize>,

    /// The raw text of the word.
    pub lexeme: &'source str,

    /// The kind of the word's token, if the whole word is exactly one token.
    pub kind: Option<TokenKind>,
}
