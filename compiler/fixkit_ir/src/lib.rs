//! fixkit IR - token stream types
//!
//! This crate contains the data model every fixer works on:
//! - [`Span`] for source locations
//! - [`Token`] and [`TokenKind`] for lexer output
//! - [`Tokens`], the index-stable token stream with its navigation and
//!   mutation primitives
//! - [`BlockKind`] and [`StructuralError`] for balanced-block matching
//!
//! # Invariants
//!
//! - Concatenating token contents in order reproduces the lexed source
//!   until a fixer clears a token.
//! - A stream's length never changes after construction.
//! - Token kinds never change; only content can be cleared.

mod block;
mod span;
mod token;
mod tokens;

pub use block::{BlockKind, StructuralError};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
pub use tokens::{Direction, Tokens};
