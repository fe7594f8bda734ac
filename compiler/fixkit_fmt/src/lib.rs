//! fixkit Fixers
//!
//! Token-level style fixers for PHP source.
//!
//! # Architecture
//!
//! A fix run is three steps over one source text:
//!
//! 1. **Lex**: [`fixkit_lexer::tokenize`] turns the text into an
//!    index-stable [`Tokens`] stream
//! 2. **Fix**: a [`Fixer`] clears token contents in place
//! 3. **Render**: [`Tokens::render`] concatenates the contents back
//!
//! Runs share nothing but the fixer, so [`fix_sources`] processes
//! independent sources in parallel.
//!
//! # Modules
//!
//! - [`rules`]: the fixer implementations

mod fixer;
pub mod rules;

use fixkit_ir::Tokens;
use fixkit_lexer::tokenize;
use rayon::prelude::*;
use tracing::debug;

pub use fixer::{FixError, FixResult, Fixer};
pub use rules::{fix_parenthesis_spacing, ParenthesisFixer};

/// Fix a single source text with `fixer`.
///
/// Sources the fixer reports as non-candidates come back unchanged without
/// running the rule.
///
/// # Example
///
/// ```
/// use fixkit_fmt::{fix_source, ParenthesisFixer};
///
/// let result = fix_source("<?php if ( $a ) {}", &ParenthesisFixer).unwrap();
/// assert_eq!(result.code, "<?php if ($a) {}");
/// assert!(result.changed);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(fixer = fixer.name()))]
pub fn fix_source(source: &str, fixer: &dyn Fixer) -> Result<FixResult, FixError> {
    let mut tokens = tokenize(source)?;

    if fixer.is_candidate(&tokens) {
        fixer.fix(&mut tokens)?;
    } else {
        debug!("not a candidate, skipping");
    }

    Ok(render(&tokens))
}

/// Fix many independent sources in parallel.
///
/// Results are returned in input order. A failure in one source does not
/// affect the others.
pub fn fix_sources<S>(sources: &[S], fixer: &dyn Fixer) -> Vec<Result<FixResult, FixError>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| fix_source(source.as_ref(), fixer))
        .collect()
}

fn render(tokens: &Tokens) -> FixResult {
    FixResult {
        code: tokens.render(),
        changed: tokens.is_changed(),
    }
}
