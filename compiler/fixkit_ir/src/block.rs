//! Block kinds and structural errors raised while matching them.

use std::fmt;

use crate::{Span, TokenKind};

/// A pair of opening/closing token kinds that nest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockKind {
    /// `(` ... `)`
    Parenthesis,
    /// `{` ... `}`
    CurlyBrace,
    /// `[` ... `]`
    SquareBrace,
}

impl BlockKind {
    pub const ALL: [BlockKind; 3] = [
        BlockKind::Parenthesis,
        BlockKind::CurlyBrace,
        BlockKind::SquareBrace,
    ];

    /// Token kind that opens this block.
    #[inline]
    pub const fn open(self) -> TokenKind {
        match self {
            BlockKind::Parenthesis => TokenKind::OpenParen,
            BlockKind::CurlyBrace => TokenKind::OpenBrace,
            BlockKind::SquareBrace => TokenKind::OpenBracket,
        }
    }

    /// Token kind that closes this block.
    #[inline]
    pub const fn close(self) -> TokenKind {
        match self {
            BlockKind::Parenthesis => TokenKind::CloseParen,
            BlockKind::CurlyBrace => TokenKind::CloseBrace,
            BlockKind::SquareBrace => TokenKind::CloseBracket,
        }
    }

    /// The block opened by `kind`, if any.
    pub fn from_open(kind: TokenKind) -> Option<BlockKind> {
        Self::ALL.into_iter().find(|block| block.open() == kind)
    }

    /// The block closed by `kind`, if any.
    pub fn from_close(kind: TokenKind) -> Option<BlockKind> {
        Self::ALL.into_iter().find(|block| block.close() == kind)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockKind::Parenthesis => "parenthesis",
            BlockKind::CurlyBrace => "curly brace",
            BlockKind::SquareBrace => "square brace",
        })
    }
}

/// The token stream does not have the shape a block lookup requires.
///
/// Always fatal for the pass that hit it: the stream came from a lexer that
/// was fed unbalanced source, or the caller passed a wrong index.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StructuralError {
    #[error("token index {index} is out of bounds for a stream of {len} tokens")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("token {index} at {span} is {found}, not the start of a {block} block")]
    NotBlockOpen {
        block: BlockKind,
        index: usize,
        span: Span,
        found: TokenKind,
    },

    #[error("token {index} at {span} is {found}, not the end of a {block} block")]
    NotBlockClose {
        block: BlockKind,
        index: usize,
        span: Span,
        found: TokenKind,
    },

    #[error("{block} block opened by token {index} at {span} is never closed")]
    Unclosed {
        block: BlockKind,
        index: usize,
        span: Span,
    },

    #[error("{block} block closed by token {index} at {span} is never opened")]
    Unopened {
        block: BlockKind,
        index: usize,
        span: Span,
    },
}
