//! Tests for lexer behavior at token boundaries and on malformed input.

mod common;
use common::*;

use sqlfront_core::lexer::LexError;
use sqlfront_core::{Keyword, Lexer, TokenKind};

#[test]
fn every_byte_belongs_to_a_token() {
    let sql = "SELECT /* c */ a,-- x\n'it''s' FROM \"t\";";
    let rebuilt: String = Lexer::new(sql)
        .tokenize()
        .iter()
        .map(|token| token.text().to_owned())
        .collect();
    assert_eq!(rebuilt, sql);
}

#[test]
fn spans_are_contiguous() {
    let tokens = Lexer::new("a  + 1.5e3\n").tokenize();
    let mut offset = 0;
    for token in &tokens {
        assert_eq!(token.span().start, offset);
        offset = token.span().end;
    }
    assert_eq!(offset, "a  + 1.5e3\n".len());
}

#[test]
fn invalid_blob_then_unterminated_string() {
    let tokens = tokens("x'CAR'");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind(), &TokenKind::Error(LexError::InvalidBlob));
    assert_eq!(tokens[0].text(), "x'CAR");
    assert!(matches!(
        tokens[1].kind(),
        TokenKind::Error(LexError::UnexpectedEof(_))
    ));
    assert_eq!(tokens[1].text(), "'");
    let TokenKind::Error(err) = tokens[1].kind() else {
        unreachable!()
    };
    assert!(err.to_string().ends_with("unexpected EOF"));
    assert!(tokens[2].is_eof());
}

#[test]
fn trailing_underscore_is_not_part_of_a_number() {
    let tokens = tokens("1_2_");
    assert_eq!(tokens[0].kind(), &TokenKind::Numeric);
    assert_eq!(tokens[0].text(), "1_2");
    assert_eq!(tokens[1].kind(), &TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "_");
    assert!(tokens[2].is_eof());
}

#[test]
fn whitespace_only_input() {
    assert_eq!(kinds(" \t\r\n\x0c"), vec![TokenKind::Eof]);
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn end_of_input_is_sticky() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().kind(), &TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!(token.span().start, 1);
    }
}

#[test]
fn keywords_ignore_case() {
    assert_eq!(
        kinds("select Select sElEcT"),
        vec![
            TokenKind::Keyword(Keyword::Select),
            TokenKind::Keyword(Keyword::Select),
            TokenKind::Keyword(Keyword::Select),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn quoted_identifiers() {
    let tokens = tokens("\"a\"\"b\" [c d] `e`");
    assert!(tokens[..3]
        .iter()
        .all(|token| token.kind() == &TokenKind::Identifier));
    assert_eq!(tokens[0].text(), "\"a\"\"b\"");
    assert_eq!(tokens[1].text(), "[c d]");
}

#[test]
fn operators_take_the_longest_match() {
    assert_eq!(
        kinds("->> -> || << <= <> == != >= >>"),
        vec![
            TokenKind::DoubleArrow,
            TokenKind::Arrow,
            TokenKind::Concat,
            TokenKind::LeftShift,
            TokenKind::LtEq,
            TokenKind::LtGt,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::GtEq,
            TokenKind::RightShift,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn variables() {
    assert_eq!(
        kinds("? ?12 :a @b $c::d(e)"),
        vec![
            TokenKind::QuestionVariable,
            TokenKind::QuestionVariable,
            TokenKind::ColonVariable,
            TokenKind::AtVariable,
            TokenKind::DollarVariable,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_block_comment_runs_to_the_end() {
    let tokens = tokens("a /* open");
    assert_eq!(tokens[1].kind(), &TokenKind::CComment);
    assert_eq!(tokens[1].text(), "/* open");
    assert!(tokens[2].is_eof());
}

#[test]
fn lexing_resumes_after_an_error() {
    assert_eq!(
        kinds("a é b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Error(LexError::UnexpectedCharacter('é')),
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn invalid_utf8_is_reported_with_its_offset() {
    let err = Lexer::from_bytes(b"SELECT \xc3\x28").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("source is not valid UTF-8: invalid byte sequence at offset 7".to_owned())
    );
}
