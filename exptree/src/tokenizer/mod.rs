pub mod token;

use logos::{Lexer, Logos, SpannedIter};
use std::iter::Peekable;
pub use token::{TokenKind, Word};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns a lazy iterator over the whitespace-separated words of the input.
pub fn words(input: &str) -> Words<'_> {
    Words {
        source: input,
        tokens: tokenize(input).spanned().peekable(),
    }
}

/// Iterator over the whitespace-separated [`Word`]s of some source code. See [`words`].
pub struct Words<'source> {
    /// The source code being split.
    source: &'source str,

    /// The underlying token stream.
    tokens: Peekable<SpannedIter<'source, TokenKind>>,
}

impl<'source> Iterator for Words<'source> {
    type Item = Word<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        // skip to the first token of the next word
        let (first, mut span) = loop {
            let (kind, span) = self.tokens.next()?;
            match kind {
                Ok(kind) if kind.is_whitespace() => continue,
                kind => break (kind.ok(), span),
            }
        };

        // then absorb every token up to the next whitespace
        let mut count = 1;
        while let Some((kind, next_span)) = self.tokens.peek() {
            if kind.as_ref().map_or(false, |kind| kind.is_whitespace()) {
                break;
            }
            span.end = next_span.end;
            count += 1;
            self.tokens.next();
        }

        Some(Word {
            lexeme: &self.source[span.clone()],
            span,
            kind: first.filter(|_| count == 1),
        })
    }
}
