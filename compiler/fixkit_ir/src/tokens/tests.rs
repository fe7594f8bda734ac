use pretty_assertions::assert_eq;

use super::*;
use crate::Span;
use crate::TokenKind::{
    Array, CloseBrace, CloseParen, Comment, Identifier, Number, OpenBrace, OpenParen, Whitespace,
};

/// Build a stream from `(kind, content)` pairs with contiguous spans.
fn stream(parts: &[(TokenKind, &str)]) -> Tokens {
    let mut offset = 0u32;
    parts
        .iter()
        .map(|&(kind, content)| {
            let len = u32::try_from(content.len()).unwrap();
            let token = Token::new(kind, content, Span::new(offset, offset + len));
            offset += len;
            token
        })
        .collect()
}

// === prev/next non-whitespace ===

#[test]
fn prev_non_whitespace_skips_whitespace() {
    let tokens = stream(&[
        (Array, "array"),
        (Whitespace, " "),
        (Whitespace, "\n"),
        (OpenParen, "("),
    ]);
    assert_eq!(tokens.prev_non_whitespace(3), Some(0));
    assert_eq!(tokens.prev_non_whitespace(1), Some(0));
}

#[test]
fn prev_non_whitespace_stops_at_start() {
    let tokens = stream(&[(Whitespace, " "), (OpenParen, "(")]);
    assert_eq!(tokens.prev_non_whitespace(1), None);
    assert_eq!(tokens.prev_non_whitespace(0), None);
}

#[test]
fn prev_non_whitespace_is_strictly_before() {
    let tokens = stream(&[(Identifier, "foo"), (OpenParen, "(")]);
    assert_eq!(tokens.prev_non_whitespace(1), Some(0));
    assert_eq!(tokens.prev_non_whitespace(0), None);
}

#[test]
fn prev_non_whitespace_past_the_end() {
    let tokens = stream(&[(Identifier, "foo"), (Whitespace, " ")]);
    assert_eq!(tokens.prev_non_whitespace(10), Some(0));
}

#[test]
fn next_non_whitespace() {
    let tokens = stream(&[
        (OpenParen, "("),
        (Whitespace, "  "),
        (Number, "1"),
        (Whitespace, " "),
    ]);
    assert_eq!(tokens.next_non_whitespace(0), Some(2));
    assert_eq!(tokens.next_non_whitespace(2), None);
    assert_eq!(tokens.next_non_whitespace(usize::MAX), None);
}

// === block matching ===

#[test]
fn find_block_end_simple() {
    let tokens = stream(&[(OpenParen, "("), (Number, "1"), (CloseParen, ")")]);
    assert_eq!(tokens.find_block_end(BlockKind::Parenthesis, 0), Ok(2));
}

#[test]
fn find_block_end_nested() {
    // ( ( 1 ) ( ) )
    let tokens = stream(&[
        (OpenParen, "("),
        (OpenParen, "("),
        (Number, "1"),
        (CloseParen, ")"),
        (OpenParen, "("),
        (CloseParen, ")"),
        (CloseParen, ")"),
    ]);
    assert_eq!(tokens.find_block_end(BlockKind::Parenthesis, 0), Ok(6));
    assert_eq!(tokens.find_block_end(BlockKind::Parenthesis, 1), Ok(3));
    assert_eq!(tokens.find_block_end(BlockKind::Parenthesis, 4), Ok(5));
}

#[test]
fn find_block_end_ignores_other_block_kinds() {
    // ( { ) }  -- braces do not affect parenthesis depth
    let tokens = stream(&[
        (OpenParen, "("),
        (OpenBrace, "{"),
        (CloseParen, ")"),
        (CloseBrace, "}"),
    ]);
    assert_eq!(tokens.find_block_end(BlockKind::Parenthesis, 0), Ok(2));
    assert_eq!(tokens.find_block_end(BlockKind::CurlyBrace, 1), Ok(3));
}

#[test]
fn find_block_end_unclosed() {
    let tokens = stream(&[
        (Identifier, "foo"),
        (OpenParen, "("),
        (OpenParen, "("),
        (CloseParen, ")"),
    ]);
    assert_eq!(
        tokens.find_block_end(BlockKind::Parenthesis, 1),
        Err(StructuralError::Unclosed {
            block: BlockKind::Parenthesis,
            index: 1,
            span: Span::new(3, 4),
        })
    );
}

#[test]
fn find_block_end_wrong_start() {
    let tokens = stream(&[(Identifier, "foo"), (OpenParen, "(")]);
    assert_eq!(
        tokens.find_block_end(BlockKind::Parenthesis, 0),
        Err(StructuralError::NotBlockOpen {
            block: BlockKind::Parenthesis,
            index: 0,
            span: Span::new(0, 3),
            found: Identifier,
        })
    );
    assert_eq!(
        tokens.find_block_end(BlockKind::SquareBrace, 1),
        Err(StructuralError::NotBlockOpen {
            block: BlockKind::SquareBrace,
            index: 1,
            span: Span::new(3, 4),
            found: OpenParen,
        })
    );
}

#[test]
fn find_block_end_out_of_bounds() {
    let tokens = stream(&[(OpenParen, "(")]);
    assert_eq!(
        tokens.find_block_end(BlockKind::Parenthesis, 5),
        Err(StructuralError::IndexOutOfBounds { index: 5, len: 1 })
    );
}

#[test]
fn find_block_start_mirrors_end() {
    let tokens = stream(&[
        (OpenParen, "("),
        (OpenParen, "("),
        (CloseParen, ")"),
        (CloseParen, ")"),
    ]);
    assert_eq!(tokens.find_block_start(BlockKind::Parenthesis, 3), Ok(0));
    assert_eq!(tokens.find_block_start(BlockKind::Parenthesis, 2), Ok(1));
}

#[test]
fn find_block_start_unopened() {
    let tokens = stream(&[(Number, "1"), (CloseParen, ")")]);
    assert_eq!(
        tokens.find_block_start(BlockKind::Parenthesis, 1),
        Err(StructuralError::Unopened {
            block: BlockKind::Parenthesis,
            index: 1,
            span: Span::new(1, 2),
        })
    );
}

#[test]
fn structural_error_message() {
    let err = StructuralError::Unclosed {
        block: BlockKind::Parenthesis,
        index: 4,
        span: Span::new(10, 11),
    };
    assert_eq!(
        err.to_string(),
        "parenthesis block opened by token 4 at 10..11 is never closed"
    );
}

// === clearing ===

#[test]
fn clear_at_marks_changed() {
    let mut tokens = stream(&[(Whitespace, " "), (Number, "1")]);
    assert!(!tokens.is_changed());
    assert!(tokens.clear_at(0));
    assert!(tokens.is_changed());
    assert_eq!(tokens.render(), "1");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), Whitespace);
    assert_eq!(tokens[0].span(), Span::new(0, 1));
}

#[test]
fn clear_at_empty_or_out_of_bounds_is_noop() {
    let mut tokens = stream(&[(Whitespace, "")]);
    assert!(!tokens.clear_at(0));
    assert!(!tokens.clear_at(7));
    assert!(!tokens.is_changed());
}

#[test]
fn clear_whitespace_forward() {
    let mut tokens = stream(&[
        (OpenParen, "("),
        (Whitespace, "  "),
        (Number, "1"),
        (CloseParen, ")"),
    ]);
    assert!(tokens.clear_whitespace_adjacent(0, Direction::Forward));
    assert_eq!(tokens.render(), "(1)");
}

#[test]
fn clear_whitespace_backward() {
    let mut tokens = stream(&[
        (OpenParen, "("),
        (Number, "1"),
        (Whitespace, "\t "),
        (CloseParen, ")"),
    ]);
    assert!(tokens.clear_whitespace_adjacent(3, Direction::Backward));
    assert_eq!(tokens.render(), "(1)");
}

#[test]
fn clear_whitespace_keeps_newlines() {
    let mut tokens = stream(&[
        (OpenParen, "("),
        (Whitespace, "\n    "),
        (Number, "1"),
        (Whitespace, "\n"),
        (CloseParen, ")"),
    ]);
    assert!(!tokens.clear_whitespace_adjacent(0, Direction::Forward));
    assert!(!tokens.clear_whitespace_adjacent(4, Direction::Backward));
    assert_eq!(tokens.render(), "(\n    1\n)");
    assert!(!tokens.is_changed());
}

#[test]
fn clear_whitespace_checks_the_token_beyond() {
    // The comment swallowed the line break, so the indentation before `)`
    // holds no newline itself but still sits at the start of a line.
    let mut tokens = stream(&[
        (OpenParen, "("),
        (Number, "1"),
        (Comment, "// one\n"),
        (Whitespace, "    "),
        (CloseParen, ")"),
    ]);
    assert!(!tokens.clear_whitespace_adjacent(4, Direction::Backward));
    assert_eq!(tokens.render(), "(1// one\n    )");
}

#[test]
fn clear_whitespace_only_touches_whitespace() {
    let mut tokens = stream(&[(OpenParen, "("), (Number, "1"), (CloseParen, ")")]);
    assert!(!tokens.clear_whitespace_adjacent(0, Direction::Forward));
    assert!(!tokens.clear_whitespace_adjacent(2, Direction::Backward));
    assert_eq!(tokens.render(), "(1)");
}

#[test]
fn clear_whitespace_at_boundaries_is_noop() {
    let mut tokens = stream(&[(Whitespace, " "), (CloseParen, ")")]);
    // Stepping back from 1 reaches 0, but there is nothing beyond it.
    assert!(!tokens.clear_whitespace_adjacent(1, Direction::Backward));
    assert!(!tokens.clear_whitespace_adjacent(0, Direction::Backward));

    let mut tokens = stream(&[(OpenParen, "("), (Whitespace, " ")]);
    assert!(!tokens.clear_whitespace_adjacent(0, Direction::Forward));
    assert!(!tokens.clear_whitespace_adjacent(1, Direction::Forward));
    assert_eq!(tokens.render(), "( ");
}

#[test]
fn display_matches_render() {
    let tokens = stream(&[(Identifier, "foo"), (OpenParen, "("), (CloseParen, ")")]);
    assert_eq!(tokens.to_string(), tokens.render());
}

#[test]
fn block_kind_lookup() {
    assert_eq!(BlockKind::from_open(OpenParen), Some(BlockKind::Parenthesis));
    assert_eq!(BlockKind::from_close(CloseBrace), Some(BlockKind::CurlyBrace));
    assert_eq!(BlockKind::from_open(CloseParen), None);
}

#[test]
fn direction_step() {
    assert_eq!(Direction::Forward.step(3), Some(4));
    assert_eq!(Direction::Backward.step(3), Some(2));
    assert_eq!(Direction::Backward.step(0), None);
    assert_eq!(Direction::Forward.step(usize::MAX), None);
}
