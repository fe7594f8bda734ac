//! Index-stable token stream.
//!
//! [`Tokens`] is built once from lexer output and never changes length
//! afterwards: there is no insert or remove, so an index obtained at any
//! point of a fix pass stays valid for the whole pass. The only mutation is
//! clearing a token's content.

use std::fmt;
use std::ops::Index;

use crate::{BlockKind, StructuralError, Token, TokenKind};

/// Which way to step from an index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards the end of the stream (`+1`).
    Forward,
    /// Towards the start of the stream (`-1`).
    Backward,
}

impl Direction {
    /// The index one step away, or `None` when stepping below zero.
    #[inline]
    pub fn step(self, index: usize) -> Option<usize> {
        match self {
            Direction::Forward => index.checked_add(1),
            Direction::Backward => index.checked_sub(1),
        }
    }
}

/// Ordered sequence of tokens making up one source file.
///
/// Concatenating every token's content reproduces the lexed source until a
/// fixer clears something; [`Tokens::render`] produces the current text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tokens {
    tokens: Vec<Token>,
    changed: bool,
}

impl Tokens {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the token at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Whether any clear since construction actually removed content.
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Check if any token has the given kind.
    pub fn contains_kind(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|token| token.is_kind(kind))
    }

    /// Index of the closest token before `index` that is not whitespace.
    ///
    /// Scans strictly backward from `index - 1` and stops at the start of
    /// the stream. `index` itself may be out of bounds.
    pub fn prev_non_whitespace(&self, index: usize) -> Option<usize> {
        let end = index.min(self.tokens.len());
        self.tokens[..end]
            .iter()
            .rposition(|token| !token.is_whitespace())
    }

    /// Index of the closest token after `index` that is not whitespace.
    pub fn next_non_whitespace(&self, index: usize) -> Option<usize> {
        let start = index.checked_add(1)?;
        self.tokens
            .get(start..)?
            .iter()
            .position(|token| !token.is_whitespace())
            .map(|offset| start + offset)
    }

    /// Index of the token closing the block opened at `open_index`.
    ///
    /// Only tokens of `block`'s own open/close kinds move the nesting
    /// counter. Parentheses inside strings, comments and casts are already
    /// opaque tokens and never count.
    pub fn find_block_end(
        &self,
        block: BlockKind,
        open_index: usize,
    ) -> Result<usize, StructuralError> {
        let open = self.get_checked(open_index)?;
        if !open.is_kind(block.open()) {
            return Err(StructuralError::NotBlockOpen {
                block,
                index: open_index,
                span: open.span(),
                found: open.kind(),
            });
        }

        let mut depth = 0usize;
        for (index, token) in self.tokens.iter().enumerate().skip(open_index) {
            if token.is_kind(block.open()) {
                depth += 1;
            } else if token.is_kind(block.close()) {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
        }

        Err(StructuralError::Unclosed {
            block,
            index: open_index,
            span: open.span(),
        })
    }

    /// Index of the token opening the block closed at `close_index`.
    pub fn find_block_start(
        &self,
        block: BlockKind,
        close_index: usize,
    ) -> Result<usize, StructuralError> {
        let close = self.get_checked(close_index)?;
        if !close.is_kind(block.close()) {
            return Err(StructuralError::NotBlockClose {
                block,
                index: close_index,
                span: close.span(),
                found: close.kind(),
            });
        }

        let mut depth = 0usize;
        for (index, token) in self.tokens[..=close_index].iter().enumerate().rev() {
            if token.is_kind(block.close()) {
                depth += 1;
            } else if token.is_kind(block.open()) {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
        }

        Err(StructuralError::Unopened {
            block,
            index: close_index,
            span: close.span(),
        })
    }

    /// Empty the content of the token at `index`.
    ///
    /// Returns `true` if content was removed. Out of bounds is a no-op.
    pub fn clear_at(&mut self, index: usize) -> bool {
        let cleared = self.tokens.get_mut(index).is_some_and(Token::clear);
        self.changed |= cleared;
        cleared
    }

    /// Clear the whitespace token next to `index` in `direction`.
    ///
    /// The candidate at one step is cleared only when it is whitespace
    /// without a newline and the token one step further holds no newline
    /// either. Returns `false` without touching anything when either
    /// position falls outside the stream.
    pub fn clear_whitespace_adjacent(&mut self, index: usize, direction: Direction) -> bool {
        let Some(candidate) = direction.step(index).filter(|&i| i < self.tokens.len()) else {
            return false;
        };
        let Some(beyond) = direction.step(candidate).filter(|&i| i < self.tokens.len()) else {
            return false;
        };

        let space = &self.tokens[candidate];
        let space_is_inline = space.is_whitespace() && !space.contains_newline();
        let beyond_is_inline = !self.tokens[beyond].contains_newline();

        if space_is_inline && beyond_is_inline {
            self.clear_at(candidate)
        } else {
            false
        }
    }

    /// Concatenate the current content of every token.
    pub fn render(&self) -> String {
        let capacity = self.tokens.iter().map(|token| token.content().len()).sum();
        let mut code = String::with_capacity(capacity);
        for token in &self.tokens {
            code.push_str(token.content());
        }
        code
    }

    fn get_checked(&self, index: usize) -> Result<&Token, StructuralError> {
        self.tokens
            .get(index)
            .ok_or(StructuralError::IndexOutOfBounds {
                index,
                len: self.tokens.len(),
            })
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Tokens {
            tokens,
            changed: false,
        }
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Index<usize> for Tokens {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.content())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
