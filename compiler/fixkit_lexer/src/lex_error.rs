//! Lexer error types.
//!
//! Tokenizing never fails on content: anything unrecognized becomes a
//! [`TokenKind::Unknown`](fixkit_ir::TokenKind::Unknown) token. The only
//! failure is a source too large for 32-bit spans.

use fixkit_ir::SpanError;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("source is too large to tokenize: {0}")]
    SourceTooLarge(#[from] SpanError),
}
