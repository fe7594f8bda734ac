//! Fixer Rules
//!
//! Each rule is a zero-sized struct implementing [`Fixer`](crate::Fixer),
//! backed by a free function over [`Tokens`](fixkit_ir::Tokens) that holds
//! the actual logic and can be called without a rule object.
//!
//! # Rules
//!
//! 1. **`ParenthesisFixer`**: no space after `(` or before `)`, line breaks
//!    kept, `array( ... )` exempt

mod parentheses;

pub use parentheses::{fix_parenthesis_spacing, ParenthesisFixer};
