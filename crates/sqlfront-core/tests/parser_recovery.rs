//! Tests for error recovery.

mod common;
use common::*;

use sqlfront_core::tree::Diagnostic;
use sqlfront_core::Parser;

#[test]
fn missing_commas_between_list_items() {
    assert_eq!(
        render("SELECT a IN (1 2 3);"),
        "SQLStatement{ Select{ Token(SELECT) ResultColumn{ Equality{ ColumnReference{ Token(a) } \
         Token(IN) Parenthesized{ Token(() Token(1) ErrorMissing(\"missing comma\") Token(2) \
         ErrorMissing(\"missing comma\") Token(3) Token()) } } } } Token(;) }"
    );
}

#[test]
fn one_missing_comma_per_adjacent_pair() {
    for (sql, pairs) in [
        ("SELECT f(a b)", 1),
        ("SELECT f(a b c)", 2),
        ("SELECT f(1 'x' :v ?)", 3),
        ("SELECT 1 IN (a, b c, d e)", 2),
    ] {
        assert_eq!(count_errors(sql, "missing comma"), pairs, "{sql}");
    }
}

#[test]
fn empty_list_item() {
    assert_eq!(
        error_messages("SELECT f(1,,2)"),
        vec!["missing expression"]
    );
    assert_eq!(error_messages("SELECT 1,;"), vec!["missing result column"]);
}

#[test]
fn noise_inside_a_list_is_skipped() {
    let tree = parse_one("SELECT f(1, ] 2);");
    let rendered = tree.to_string();
    assert!(rendered.contains("ErrorExpecting(\"expecting expression\")"), "{rendered}");
    assert!(rendered.contains("Token(2) Token())"), "{rendered}");
}

#[test]
fn unclosed_parenthesis_at_semicolon() {
    assert_eq!(
        render("SELECT (1;"),
        "SQLStatement{ Select{ Token(SELECT) ResultColumn{ Parenthesized{ Token(() Token(1) \
         ErrorMissing(\"missing )\") } } } Token(;) }"
    );
}

#[test]
fn end_of_input_is_reported_once() {
    let tree = parse_one("SELECT CAST(a AS");
    let eof_errors = tree
        .errors()
        .into_iter()
        .filter(|error| error.diagnostic() == Diagnostic::UnexpectedEof)
        .count();
    assert_eq!(eof_errors, 1, "{tree}");
}

#[test]
fn each_statement_gets_its_own_end_of_input_error() {
    let mut parser = Parser::new("ALTER");
    let (first, _) = parser.parse_statement();
    assert!(first.has_errors());
    assert!(parser.is_at_end());
    let (again, _) = parser.parse_statement();
    assert_eq!(again.to_string(), "SQLStatement{ Token(EOF) }");
}

#[test]
fn lexer_errors_are_skipped_as_tokens() {
    let tree = parse_one("SELECT 1 + é;");
    let rendered = tree.to_string();
    assert!(rendered.contains("ErrorExpecting(\"expecting expression\") Skipped{ Token(é) }"));
    assert!(rendered.ends_with("Token(;) }"));
}

#[test]
fn recovery_never_crosses_a_semicolon() {
    let statements = parse_all("SELECT CASE 1; BEGIN");
    assert_eq!(statements.len(), 2);
    assert!(statements[0].has_errors());
    assert_eq!(
        statements[1].tree.to_string(),
        "SQLStatement{ Begin{ Token(BEGIN) } Token(EOF) }"
    );
}

#[test]
fn missing_table_name_message() {
    assert_eq!(
        missing("missing table name").to_string(),
        "ErrorMissing(\"missing table name\")"
    );
    assert_eq!(
        error_messages("ALTER TABLE RENAME TO b"),
        vec!["missing table name"]
    );
}

#[test]
fn unclosed_filter_clause_at_end_of_input() {
    let rendered = render("SELECT f(a) FILTER (WHERE a b");
    assert!(
        rendered.ends_with(
            "ErrorExpecting(\"expecting )\") Skipped{ Token(b) } ErrorUnexpectedEOF } } } } \
             Token(EOF) }"
        ),
        "{rendered}"
    );

    let rendered = render("SELECT f(a) FILTER (WHERE a b;");
    assert!(
        rendered.contains("Skipped{ Token(b) } ErrorMissing(\"missing )\") }"),
        "{rendered}"
    );
}

#[test]
fn deeply_nested_expressions_are_cut_off() {
    let parens = format!("SELECT {}1{}, 2;", "(".repeat(1000), ")".repeat(1000));
    let minus = format!("SELECT {}1, 2;", "- ".repeat(1000));
    let not = format!("SELECT {}1, 2;", "NOT ".repeat(1000));
    for sql in [parens, minus, not] {
        let tree = parse_one(&sql);
        let messages: Vec<&str> = tree.errors().into_iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["expression nested too deeply"]);
        // every token is still in the tree
        assert_eq!(tree.terminals().len(), tokens(&sql).len() - 1);
        assert!(tree.to_string().ends_with("ResultColumn{ Token(2) } } Token(;) }"));
    }
}

#[test]
fn moderate_nesting_parses_cleanly() {
    let sql = format!("SELECT {}1{};", "(".repeat(150), ")".repeat(150));
    assert!(!parse_one(&sql).has_errors());
    let sql = format!("SELECT {}1;", "- ".repeat(150));
    assert!(!parse_one(&sql).has_errors());
}
