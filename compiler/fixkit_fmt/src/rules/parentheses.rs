//! `ParenthesisFixer`: no whitespace just inside parentheses.
//!
//! There must not be a space after an opening parenthesis or before a
//! closing one. Whitespace that contains a line break, or that sits next to
//! a token containing one, is left alone so that deliberately broken
//! argument lists keep their layout.
//!
//! Parentheses following the `array` keyword are skipped entirely. Short
//! array syntax (`[ ... ]`) uses bracket tokens and is never visited.

use fixkit_ir::{BlockKind, Direction, StructuralError, TokenKind, Tokens};
use tracing::{debug, trace};

use crate::Fixer;

/// Rule for whitespace inside parentheses.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ParenthesisFixer;

impl Fixer for ParenthesisFixer {
    fn name(&self) -> &'static str {
        "parenthesis"
    }

    fn description(&self) -> &'static str {
        "There MUST NOT be a space after the opening parenthesis. \
         There MUST NOT be a space before the closing parenthesis."
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.contains_kind(TokenKind::OpenParen)
    }

    fn fix(&self, tokens: &mut Tokens) -> Result<(), StructuralError> {
        fix_parenthesis_spacing(tokens)
    }
}

/// Strip inline whitespace just inside every non-`array` parenthesis pair.
///
/// Every `(` is visited in stream order, so nested pairs are each handled
/// on their own. Fails only when a `(` has no matching `)`.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn fix_parenthesis_spacing(tokens: &mut Tokens) -> Result<(), StructuralError> {
    let mut cleared = 0usize;

    for index in 0..tokens.len() {
        if !tokens[index].is_kind(TokenKind::OpenParen) {
            continue;
        }

        if follows_array_keyword(tokens, index) {
            trace!(index, "skipping array constructor");
            continue;
        }

        let end = tokens.find_block_end(BlockKind::Parenthesis, index)?;

        if tokens.clear_whitespace_adjacent(index, Direction::Forward) {
            trace!(index, "cleared space after `(`");
            cleared += 1;
        }
        if tokens.clear_whitespace_adjacent(end, Direction::Backward) {
            trace!(index = end, "cleared space before `)`");
            cleared += 1;
        }
    }

    debug!(cleared, "parenthesis spacing done");
    Ok(())
}

fn follows_array_keyword(tokens: &Tokens, index: usize) -> bool {
    tokens
        .prev_non_whitespace(index)
        .is_some_and(|prev| tokens[prev].is_kind(TokenKind::Array))
}
