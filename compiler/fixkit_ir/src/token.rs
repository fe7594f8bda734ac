//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it covers.
//! Kinds are fixed at lexing time; content may only be cleared, and only
//! through [`Tokens`](crate::Tokens).

use std::fmt;

use crate::Span;

/// Closed classification of PHP tokens.
///
/// Fine enough for block matching and whitespace rules, coarse everywhere
/// else: every keyword other than `array` is a [`TokenKind::Identifier`],
/// every operator an [`TokenKind::Operator`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Text outside `<?php ... ?>`.
    InlineHtml,
    /// `<?php` plus the single whitespace character that follows it.
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>` plus an optional single trailing newline.
    CloseTag,
    /// A run of spaces, tabs, carriage returns and newlines.
    Whitespace,
    /// `// ...`, `# ...` (including the terminating newline) or `/* ... */`.
    Comment,
    /// `/** ... */`
    DocComment,
    /// `$name`
    Variable,
    /// Names and keywords other than `array`.
    Identifier,
    /// The array-constructor keyword, any case.
    Array,
    /// Integer and float literals.
    Number,
    /// Single-quoted, double-quoted and backtick literals.
    String,
    /// Heredoc and nowdoc literals.
    Heredoc,
    /// Type casts such as `(int)` or `( string )`, lexed as one token.
    Cast,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// Any other punctuation.
    Operator,
    /// Bytes the lexer could not classify.
    Unknown,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::InlineHtml => "inline HTML",
            TokenKind::OpenTag => "open tag",
            TokenKind::OpenTagWithEcho => "open tag with echo",
            TokenKind::CloseTag => "close tag",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::DocComment => "doc comment",
            TokenKind::Variable => "variable",
            TokenKind::Identifier => "identifier",
            TokenKind::Array => "`array`",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Heredoc => "heredoc",
            TokenKind::Cast => "cast",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::Operator => "operator",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Check if this kind is whitespace.
    #[inline]
    pub const fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single token: kind, literal content and original location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    content: String,
    span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, content: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            content: content.into(),
            span,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Current content. Empty once the token has been cleared.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Location in the source the stream was lexed from.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// Check if the current content spans a line break.
    #[inline]
    pub fn contains_newline(&self) -> bool {
        self.content.contains('\n')
    }

    /// Empty the content, keeping kind and span. Returns whether anything
    /// was removed.
    pub(crate) fn clear(&mut self) -> bool {
        if self.content.is_empty() {
            return false;
        }
        self.content.clear();
        true
    }
}
