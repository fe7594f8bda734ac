//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer for PHP mode (the
//! text between an open tag and `?>`). Nothing is skipped: whitespace and
//! comments are tokens, so the output concatenates back to the input.

use fixkit_ir::TokenKind;
use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // Line comments end at the newline (included) or just before `?>`.
    #[token("//", line_comment)]
    #[token("#", line_comment)]
    LineComment,

    // Runs to end of input when unterminated.
    #[token("/*", block_comment)]
    BlockComment,

    // `?>` (the close tag), `?->`, `??`, `??=` or a lone `?`.
    #[token("?", question)]
    Question,

    #[regex(r"\$[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    Variable,

    #[token("array", ignore(ascii_case))]
    Array,

    #[regex(r"[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    Identifier,

    #[regex(r"[0-9]", number)]
    Number,

    // `.`, `.=`, `...` or a fraction such as `.5`.
    #[token(".", dot)]
    Dot,

    #[token("'", quoted)]
    #[token("\"", quoted)]
    #[token("`", quoted)]
    String,

    #[token("<<<", heredoc)]
    Heredoc,

    // A cast such as `( int )` is absorbed into the opening token.
    #[token("(", cast)]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"<=>|===|!==|\*\*=|<<=|>>=|->|=>|::|==|!=|<>|<=|>=|&&|\|\||\+\+|--")]
    #[regex(r"\+=|-=|\*=|/=|%=|&=|\|=|\^=|<<|>>|\*\*")]
    #[regex(r"[;,=+\-*/%<>!&|^~:@\\$]")]
    Operator,
}

impl RawToken {
    /// Map to the public token kind. `slice` is the matched text.
    pub(crate) fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::LineComment => TokenKind::Comment,
            RawToken::BlockComment if is_doc_comment(slice) => TokenKind::DocComment,
            RawToken::BlockComment => TokenKind::Comment,
            RawToken::Question if slice.starts_with("?>") => TokenKind::CloseTag,
            RawToken::Question | RawToken::Operator => TokenKind::Operator,
            RawToken::Variable => TokenKind::Variable,
            RawToken::Array => TokenKind::Array,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Dot if slice[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                TokenKind::Number
            }
            RawToken::Dot => TokenKind::Operator,
            RawToken::Number => TokenKind::Number,
            RawToken::String => TokenKind::String,
            RawToken::Heredoc => TokenKind::Heredoc,
            RawToken::LParen if slice.len() > 1 => TokenKind::Cast,
            RawToken::LParen => TokenKind::OpenParen,
            RawToken::RParen => TokenKind::CloseParen,
            RawToken::LBracket => TokenKind::OpenBracket,
            RawToken::RBracket => TokenKind::CloseBracket,
            RawToken::LBrace => TokenKind::OpenBrace,
            RawToken::RBrace => TokenKind::CloseBrace,
        }
    }
}

/// Type names accepted inside a cast.
const CAST_TYPES: &[&str] = &[
    "int", "integer", "bool", "boolean", "float", "double", "real", "string", "array", "object",
    "unset", "binary",
];

/// `/**/` is an ordinary empty comment, not a doc comment.
fn is_doc_comment(slice: &str) -> bool {
    slice.starts_with("/**") && slice.len() > 4
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Length of the leading run of `text` whose chars satisfy `pred`.
fn run_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.find(|c: char| !pred(c)).unwrap_or(text.len())
}

/// Length of a `\n` or `\r\n` at the start of `text`, else 0.
fn newline_len(text: &str) -> usize {
    if text.starts_with("\r\n") {
        2
    } else if text.starts_with('\n') {
        1
    } else {
        0
    }
}

fn line_comment(lex: &mut Lexer<RawToken>) {
    let rest = lex.remainder();
    let newline = rest.find('\n').map(|at| at + 1);
    let close_tag = rest.find("?>");
    let end = match (newline, close_tag) {
        (Some(line_end), Some(tag)) if tag < line_end => tag,
        (Some(line_end), _) => line_end,
        (None, Some(tag)) => tag,
        (None, None) => rest.len(),
    };
    lex.bump(end);
}

fn block_comment(lex: &mut Lexer<RawToken>) {
    let rest = lex.remainder();
    let end = rest.find("*/").map_or(rest.len(), |at| at + 2);
    lex.bump(end);
}

fn question(lex: &mut Lexer<RawToken>) {
    let rest = lex.remainder();
    let len = if rest.starts_with("->") || rest.starts_with("?=") {
        2
    } else if rest.starts_with('?') {
        1
    } else if let Some(after) = rest.strip_prefix('>') {
        1 + newline_len(after)
    } else {
        0
    };
    lex.bump(len);
}

fn dot(lex: &mut Lexer<RawToken>) {
    let rest = lex.remainder();
    let len = if rest.starts_with("..") {
        2
    } else if rest.starts_with('=') {
        1
    } else if rest.starts_with(|c: char| c.is_ascii_digit()) {
        let digits = run_len(rest, |c| c.is_ascii_digit() || c == '_');
        digits + exponent_len(&rest[digits..])
    } else {
        0
    };
    lex.bump(len);
}

fn number(lex: &mut Lexer<RawToken>) {
    let len = number_tail(lex.slice(), lex.remainder());
    lex.bump(len);
}

/// Length of the rest of a number literal that starts with the digit `first`.
fn number_tail(first: &str, rest: &str) -> usize {
    if first == "0" {
        let radix = match rest.as_bytes().first() {
            Some(b'x' | b'X') => Some(16),
            Some(b'b' | b'B') => Some(2),
            Some(b'o' | b'O') => Some(8),
            _ => None,
        };
        if let Some(radix) = radix {
            let digits = run_len(&rest[1..], |c| c.is_digit(radix) || c == '_');
            if digits > 0 {
                return 1 + digits;
            }
        }
    }

    let mut len = run_len(rest, |c| c.is_ascii_digit() || c == '_');
    if rest[len..].starts_with('.') {
        len += 1;
        len += run_len(&rest[len..], |c| c.is_ascii_digit() || c == '_');
    }
    len + exponent_len(&rest[len..])
}

/// Length of an `e[+-]digits` exponent at the start of `text`, else 0.
fn exponent_len(text: &str) -> usize {
    let Some(after) = text.strip_prefix(['e', 'E']) else {
        return 0;
    };
    let sign = usize::from(after.starts_with(['+', '-']));
    let digits = &after[sign..];
    if digits.starts_with(|c: char| c.is_ascii_digit()) {
        1 + sign + run_len(digits, |c| c.is_ascii_digit() || c == '_')
    } else {
        0
    }
}

/// An unterminated string is a lex error over the opening quote alone.
fn quoted(lex: &mut Lexer<RawToken>) -> bool {
    let Some(quote) = lex.slice().chars().next() else {
        return false;
    };
    match closing_quote(lex.remainder(), quote) {
        Some(end) => {
            lex.bump(end);
            true
        }
        None => false,
    }
}

/// Byte offset just past the unescaped `quote` that closes `body`.
fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (at, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(at + c.len_utf8());
        }
    }
    None
}

fn cast(lex: &mut Lexer<RawToken>) {
    if let Some(len) = cast_len(lex.remainder()) {
        lex.bump(len);
    }
}

/// Length of `[ \t]*type[ \t]*)` at the start of `rest`, where `type` is one
/// of [`CAST_TYPES`] in any case.
fn cast_len(rest: &str) -> Option<usize> {
    let name = rest.trim_start_matches(is_blank);
    let name_len = run_len(name, |c| c.is_ascii_alphabetic());
    let is_cast = CAST_TYPES
        .iter()
        .any(|ty| ty.eq_ignore_ascii_case(&name[..name_len]));
    if !is_cast {
        return None;
    }
    let tail = name[name_len..].trim_start_matches(is_blank);
    tail.starts_with(')').then_some(rest.len() - tail.len() + 1)
}

fn heredoc(lex: &mut Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    let Some((label, header)) = heredoc_header(rest) else {
        return false;
    };
    match heredoc_end(&rest[header..], label) {
        Some(body) => {
            lex.bump(header + body);
            true
        }
        None => false,
    }
}

/// Parse the part of a heredoc/nowdoc opener after `<<<`: optional blanks,
/// a label (bare, double- or single-quoted), then a newline.
///
/// Returns the label and the header length including the newline.
fn heredoc_header(rest: &str) -> Option<(&str, usize)> {
    let name_at = rest.len() - rest.trim_start_matches(is_blank).len();
    let quote = rest[name_at..].chars().next().filter(|c| matches!(c, '"' | '\''));
    let label_at = name_at + usize::from(quote.is_some());
    let label_len = run_len(&rest[label_at..], |c| c.is_ascii_alphanumeric() || c == '_');
    let label = &rest[label_at..label_at + label_len];
    if !label.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }

    let mut end = label_at + label_len;
    if let Some(quote) = quote {
        if !rest[end..].starts_with(quote) {
            return None;
        }
        end += 1;
    }
    match newline_len(&rest[end..]) {
        0 => None,
        newline => Some((label, end + newline)),
    }
}

/// Byte offset just past the closing label of a heredoc body.
///
/// The closing label may be indented and must not be followed by another
/// label character.
fn heredoc_end(body: &str, label: &str) -> Option<usize> {
    let mut line_start = 0;
    loop {
        let line = &body[line_start..];
        let content = line.trim_start_matches(is_blank);
        let indent = line.len() - content.len();
        if let Some(after) = content.strip_prefix(label) {
            if !after.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii())
            {
                return Some(line_start + indent + label.len());
            }
        }
        line_start += line.find('\n')? + 1;
    }
}
