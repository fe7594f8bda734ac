//! Lossless PHP tokenizer using logos.
//!
//! Produces [`Tokens`] whose contents concatenate back to the input byte for
//! byte. Whitespace and comments are ordinary tokens, and anything the
//! grammar does not recognize is kept as an [`TokenKind::Unknown`] token.
//!
//! # Modes
//!
//! Source starts in inline-HTML mode. `<?php` (followed by whitespace or end
//! of input) and `<?=` switch to PHP mode, which is driven by the logos
//! `RawToken` enum until `?>` switches back.

mod lex_error;
mod raw_token;

use fixkit_ir::{Span, Token, TokenKind, Tokens};
use logos::Logos;
use tracing::debug;

use crate::raw_token::RawToken;

pub use lex_error::LexError;

/// Tokenize PHP source text.
///
/// `tokenize(source)?.render() == source` for every input.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Tokens, LexError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        pos = lex_inline_html(source, pos, &mut tokens)?;
        if pos < source.len() {
            pos = lex_php(source, pos, &mut tokens)?;
        }
    }

    debug!(count = tokens.len(), "tokenized");
    Ok(Tokens::from(tokens))
}

fn push(
    tokens: &mut Vec<Token>,
    kind: TokenKind,
    source: &str,
    range: std::ops::Range<usize>,
) -> Result<(), LexError> {
    let span = Span::try_from_range(range.clone())?;
    tokens.push(Token::new(kind, &source[range], span));
    Ok(())
}

/// Emit inline HTML up to and including the next open tag.
///
/// Returns the position right after the open tag, or the end of the source.
fn lex_inline_html(source: &str, start: usize, tokens: &mut Vec<Token>) -> Result<usize, LexError> {
    let rest = &source[start..];
    let Some((offset, len, kind)) = find_open_tag(rest) else {
        push(tokens, TokenKind::InlineHtml, source, start..source.len())?;
        return Ok(source.len());
    };

    let tag_start = start + offset;
    if offset > 0 {
        push(tokens, TokenKind::InlineHtml, source, start..tag_start)?;
    }
    push(tokens, kind, source, tag_start..tag_start + len)?;
    Ok(tag_start + len)
}

/// Locate the next open tag in `rest`: `(offset, length, kind)`.
///
/// `<?php` only counts when followed by whitespace or end of input, and
/// absorbs one whitespace character (`\r\n` counts as one).
fn find_open_tag(rest: &str) -> Option<(usize, usize, TokenKind)> {
    let mut search = 0;
    while let Some(found) = rest[search..].find("<?") {
        let at = search + found;
        let after = &rest[at + 2..];

        if after.starts_with('=') {
            return Some((at, 3, TokenKind::OpenTagWithEcho));
        }

        if after
            .get(..3)
            .is_some_and(|name| name.eq_ignore_ascii_case("php"))
        {
            let tail = &after[3..];
            let trailing = if tail.is_empty() {
                Some(0)
            } else if tail.starts_with("\r\n") {
                Some(2)
            } else if tail.starts_with(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r')) {
                Some(1)
            } else {
                None
            };
            if let Some(trailing) = trailing {
                return Some((at, 5 + trailing, TokenKind::OpenTag));
            }
        }

        search = at + 2;
    }
    None
}

/// Run the PHP-mode lexer from `start` until a close tag or end of source.
fn lex_php(source: &str, start: usize, tokens: &mut Vec<Token>) -> Result<usize, LexError> {
    let mut lexer = RawToken::lexer(&source[start..]);
    // `array` right after `->`/`?->` names a member, not the constructor.
    let mut after_object_operator = false;

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let slice = lexer.slice();
        let kind = match result {
            Ok(RawToken::Array) if after_object_operator => TokenKind::Identifier,
            Ok(raw) => raw.kind(slice),
            Err(()) => TokenKind::Unknown,
        };
        if !kind.is_whitespace() {
            after_object_operator = kind == TokenKind::Operator && matches!(slice, "->" | "?->");
        }

        let end = start + range.end;
        push(tokens, kind, source, start + range.start..end)?;
        if kind == TokenKind::CloseTag {
            return Ok(end);
        }
    }

    Ok(source.len())
}
