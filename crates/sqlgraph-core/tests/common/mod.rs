#![allow(dead_code)]

use sqlgraph_core::ast::{ComparisonOp, Condition, Literal, Query, SelectStatement};
use sqlgraph_core::{LexError, ParseError, SyntaxError, parse};

pub fn parse_query(sql: &str) -> Query {
    parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    parse_query(sql).statement
}

pub fn parse_filter(sql: &str) -> Condition {
    parse_select(sql)
        .filter
        .unwrap_or_else(|| panic!("Expected WHERE clause in: {sql}"))
}

pub fn syntax_err(sql: &str) -> SyntaxError {
    match parse_err(sql) {
        ParseError::Syntax(e) => e,
        other => panic!("Expected syntax error for: {sql}, got {other:?}"),
    }
}

pub fn lex_err(sql: &str) -> LexError {
    match parse_err(sql) {
        ParseError::Lex(e) => e,
        other => panic!("Expected lex error for: {sql}, got {other:?}"),
    }
}

/// Shorthand for `column = <number>`.
pub fn eq_num(column: &str, n: &str) -> Condition {
    Condition::comparison(column, ComparisonOp::Eq, Literal::number(n))
}

/// Verifies that `to_string()` produces a fixed point: the rendered text
/// parses back to the same AST, and renders to the same text again.
pub fn round_trip(sql: &str) {
    let ast1 = parse_query(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse_query(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the tree.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
