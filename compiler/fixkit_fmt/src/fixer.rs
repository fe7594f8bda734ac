//! The `Fixer` trait and the result/error types of a fix run.

use fixkit_ir::{StructuralError, Tokens};
use fixkit_lexer::LexError;

/// A style rule that rewrites a token stream in place.
///
/// Fixers hold no per-run state; one instance may be shared by passes over
/// many files running in parallel.
pub trait Fixer: Send + Sync {
    /// Short identifier, e.g. `"parenthesis"`.
    fn name(&self) -> &'static str;

    /// One-sentence statement of the rule.
    fn description(&self) -> &'static str;

    /// Cheap pre-check: whether `fix` could change anything at all.
    fn is_candidate(&self, _tokens: &Tokens) -> bool {
        true
    }

    /// Apply the rule. Only token contents may change, never the length of
    /// the stream or any token's kind.
    fn fix(&self, tokens: &mut Tokens) -> Result<(), StructuralError>;
}

/// Output of fixing one source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixResult {
    /// Rendered source after the fixer ran.
    pub code: String,
    /// Whether the fixer changed any token.
    pub changed: bool,
}

/// Why a source could not be fixed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FixError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("malformed token stream: {0}")]
    Structural(#[from] StructuralError),
}
