#![allow(dead_code)]

use sqlfront_core::tree::Error;
use sqlfront_core::{Construction, Lexer, NonTerminal, ParsedStatement, Parser, Token, TokenKind};

/// Renders the first statement of `sql`.
pub fn render(sql: &str) -> String {
    parse_one(sql).to_string()
}

/// Parses the first statement of `sql`.
pub fn parse_one(sql: &str) -> NonTerminal {
    Parser::new(sql).parse_statement().0
}

/// Parses every statement of `sql`.
pub fn parse_all(sql: &str) -> Vec<ParsedStatement> {
    sqlfront_core::parse(sql)
}

/// Lexes `sql` without the whitespace tokens.
pub fn tokens(sql: &str) -> Vec<Token> {
    Lexer::new(sql)
        .tokenize()
        .into_iter()
        .filter(|token| token.kind() != &TokenKind::Whitespace)
        .collect()
}

/// Kinds of [`tokens`].
pub fn kinds(sql: &str) -> Vec<TokenKind> {
    tokens(sql).iter().map(|token| token.kind().clone()).collect()
}

/// Messages of every error node in the first statement of `sql`.
pub fn error_messages(sql: &str) -> Vec<String> {
    parse_one(sql)
        .errors()
        .into_iter()
        .map(|error| error.message().to_owned())
        .collect()
}

/// Number of errors in the first statement of `sql` with this message.
pub fn count_errors(sql: &str, message: &str) -> usize {
    error_messages(sql)
        .iter()
        .filter(|m| m.as_str() == message)
        .count()
}

/// Asserts that rebuilding every statement of `sql` from its tokens loses
/// nothing but whitespace, and that the rebuilt text lexes to the same tokens.
pub fn assert_round_trip(sql: &str) {
    let rebuilt: Vec<String> = parse_all(sql)
        .into_iter()
        .map(|statement| Construction::from(statement.tree).to_source())
        .collect();
    let rebuilt = rebuilt.join(" ");

    let squeeze = |text: &str| text.split_whitespace().collect::<String>();
    let significant = |text: &str| -> Vec<(TokenKind, String)> {
        tokens(text)
            .into_iter()
            .filter(|token| !token.kind().is_comment())
            .map(|token| (token.kind().clone(), token.text().to_owned()))
            .collect()
    };
    assert_eq!(
        significant(&rebuilt),
        significant(sql),
        "tokens changed for: {sql}\nrebuilt: {rebuilt}"
    );
    if !tokens(sql).iter().any(|token| token.kind().is_comment()) {
        assert_eq!(squeeze(&rebuilt), squeeze(sql), "text changed for: {sql}");
    }
}

/// Shorthand for an expected error leaf.
pub fn missing(message: &str) -> Construction {
    Error::missing(message).into()
}
