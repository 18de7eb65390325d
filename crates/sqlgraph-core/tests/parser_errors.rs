//! Tests for parser error cases.

mod common;
use common::*;

use sqlgraph_core::lexer::LexErrorKind;
use sqlgraph_core::{ParseError, ParseOptions, Position, TokenKind, parse_with_options};

const LITERALS: [TokenKind; 5] = [
    TokenKind::StringLiteral,
    TokenKind::Number,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
];

#[test]
fn error_empty_input() {
    let e = syntax_err("");
    assert_eq!(e.expected, vec![TokenKind::Select]);
    assert_eq!(e.found, TokenKind::EndOfInput);
    assert_eq!(e.position, Position::start());
}

#[test]
fn error_comment_only_input() {
    let e = syntax_err("-- nothing here");
    assert_eq!(e.found, TokenKind::EndOfInput);
}

#[test]
fn error_not_a_select() {
    let e = syntax_err("DROP TABLE Users");
    assert_eq!(e.expected, vec![TokenKind::Select]);
    assert_eq!(e.found, TokenKind::Identifier);
    assert_eq!(e.found_text, "DROP");
}

#[test]
fn error_empty_select_list() {
    let e = syntax_err("SELECT FROM t");
    assert!(e.expects(TokenKind::Identifier));
    assert!(e.expects(TokenKind::Asterisk));
    assert_eq!(e.found, TokenKind::From);
    // Immediately after `SELECT `.
    assert_eq!(e.position, Position::new(7, 1, 8));
}

#[test]
fn error_incomplete_select() {
    let e = syntax_err("SELECT");
    assert_eq!(e.found, TokenKind::EndOfInput);
    assert_eq!(e.expected, vec![TokenKind::Asterisk, TokenKind::Identifier]);
}

#[test]
fn error_trailing_comma_in_select_list() {
    let e = syntax_err("SELECT a, FROM t");
    assert_eq!(e.expected, vec![TokenKind::Identifier]);
    assert_eq!(e.found, TokenKind::From);
}

#[test]
fn error_missing_from() {
    let e = syntax_err("SELECT a b");
    assert_eq!(e.expected, vec![TokenKind::Comma, TokenKind::From]);
    assert_eq!(e.found_text, "b");
}

#[test]
fn error_missing_table() {
    let e = syntax_err("SELECT * FROM");
    assert_eq!(e.expected, vec![TokenKind::Identifier]);
    assert_eq!(e.found, TokenKind::EndOfInput);
}

#[test]
fn error_keyword_as_table() {
    let e = syntax_err("SELECT * FROM where");
    assert_eq!(e.found, TokenKind::Where);
}

#[test]
fn error_trailing_tokens_without_where() {
    let e = syntax_err("SELECT * FROM t u");
    assert_eq!(e.expected, vec![TokenKind::Where, TokenKind::EndOfInput]);
    assert_eq!(e.found_text, "u");
}

#[test]
fn error_trailing_tokens_after_condition() {
    let e = syntax_err("SELECT * FROM t WHERE a = 1 b = 2");
    assert_eq!(
        e.expected,
        vec![TokenKind::And, TokenKind::Or, TokenKind::EndOfInput]
    );
}

#[test]
fn error_empty_where() {
    let e = syntax_err("SELECT * FROM t WHERE");
    assert_eq!(e.expected, vec![TokenKind::Identifier, TokenKind::LParen]);
}

#[test]
fn error_missing_value() {
    let e = syntax_err("SELECT * FROM t WHERE a =");
    assert_eq!(e.expected, LITERALS.to_vec());
    assert_eq!(e.found, TokenKind::EndOfInput);
}

#[test]
fn error_column_as_value() {
    let e = syntax_err("SELECT * FROM t WHERE a = b");
    assert_eq!(e.expected, LITERALS.to_vec());
    assert_eq!(e.found, TokenKind::Identifier);
}

#[test]
fn error_missing_operator() {
    let e = syntax_err("SELECT * FROM t WHERE a 1");
    assert_eq!(
        e.expected,
        vec![
            TokenKind::Eq,
            TokenKind::Neq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Lte,
            TokenKind::Gte,
        ]
    );
}

#[test]
fn error_literal_before_column() {
    let e = syntax_err("SELECT * FROM t WHERE 1 = a");
    assert!(e.expects(TokenKind::Identifier));
    assert_eq!(e.found, TokenKind::Number);
    assert_eq!(e.position, Position::new(22, 1, 23));
}

#[test]
fn error_dangling_and() {
    let e = syntax_err("SELECT * FROM t WHERE a = 1 AND");
    assert_eq!(e.found, TokenKind::EndOfInput);
    assert_eq!(e.expected, vec![TokenKind::Identifier, TokenKind::LParen]);
}

#[test]
fn error_dangling_or() {
    let e = syntax_err("SELECT * FROM t WHERE a = 1 OR");
    assert_eq!(e.found, TokenKind::EndOfInput);
}

#[test]
fn error_leading_and() {
    let e = syntax_err("SELECT * FROM t WHERE AND a = 1");
    assert_eq!(e.found, TokenKind::And);
}

#[test]
fn error_unclosed_paren() {
    let e = syntax_err("SELECT * FROM t WHERE (a = 1");
    assert_eq!(e.expected, vec![TokenKind::And, TokenKind::Or, TokenKind::RParen]);
    assert_eq!(e.found, TokenKind::EndOfInput);
}

#[test]
fn error_extra_close_paren() {
    let e = syntax_err("SELECT * FROM t WHERE a = 1)");
    assert_eq!(e.found, TokenKind::RParen);
    assert_eq!(
        e.expected,
        vec![TokenKind::And, TokenKind::Or, TokenKind::EndOfInput]
    );
}

#[test]
fn error_empty_parens() {
    let e = syntax_err("SELECT * FROM t WHERE ()");
    assert_eq!(e.found, TokenKind::RParen);
}

#[test]
fn error_negative_number_is_lexical() {
    let e = lex_err("SELECT * FROM t WHERE a = -5");
    assert_eq!(e.character, '-');
    assert_eq!(e.kind, LexErrorKind::UnexpectedCharacter);
}

#[test]
fn error_unterminated_string() {
    let e = lex_err("SELECT * FROM t WHERE a = 'x");
    assert_eq!(e.kind, LexErrorKind::UnterminatedString);
    assert_eq!(e.position, Position::new(26, 1, 27));
}

#[test]
fn error_unterminated_comment() {
    let e = lex_err("SELECT * FROM t /* WHERE a = 1");
    assert_eq!(e.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(e.position, Position::new(16, 1, 17));
}

#[test]
fn error_second_statement() {
    let e = lex_err("SELECT * FROM a; SELECT * FROM b");
    assert_eq!(e.character, ';');
}

#[test]
fn error_double_quoted_string() {
    let e = lex_err("SELECT * FROM t WHERE a = \"x\"");
    assert_eq!(e.character, '"');
}

#[test]
fn error_position_on_later_line() {
    let e = syntax_err("SELECT *\nFROM t\nWHERE a = = 1");
    assert_eq!(e.position.line, 3);
    assert_eq!(e.position.column, 11);
}

#[test]
fn error_first_failure_in_reading_order_is_reported() {
    // Tokens are read lazily: the unterminated string is never reached.
    let e = syntax_err("SELECT FROM t WHERE a = 'x");
    assert_eq!(e.found, TokenKind::From);
}

#[test]
fn error_too_deep() {
    let sql = format!("SELECT * FROM t WHERE {}a = 1{}", "(".repeat(200), ")".repeat(200));
    let err = parse_err(&sql);
    assert!(matches!(err, ParseError::TooDeep { limit: 128, .. }));
    assert_eq!(err.position().map(|p| p.offset), Some(22 + 128));
}

#[test]
fn error_too_deep_custom_limit() {
    let options = ParseOptions::new().with_max_depth(0);
    let err = parse_with_options("SELECT * FROM t WHERE (a = 1)", &options).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 0, .. }));
}

#[test]
fn error_pathological_nesting_does_not_overflow() {
    let sql = format!("SELECT * FROM t WHERE {}", "(".repeat(100_000));
    assert!(matches!(parse_err(&sql), ParseError::TooDeep { .. }));
}

#[test]
fn error_too_long() {
    let sql = format!("SELECT * FROM t WHERE a = '{}'", "x".repeat(6000));
    let options = ParseOptions::new().with_max_query_length(Some(5000));
    let err = parse_with_options(&sql, &options).unwrap_err();
    assert_eq!(
        err,
        ParseError::TooLong {
            length: 6028,
            limit: 5000,
        }
    );
    assert_eq!(err.position(), None);
}

#[test]
fn long_queries_parse_without_a_limit() {
    let sql = format!("SELECT * FROM t WHERE a = '{}'", "x".repeat(6000));
    assert!(sqlgraph_core::parse(&sql).is_ok());
}

#[test]
fn error_messages_name_location() {
    assert_eq!(
        parse_err("SELECT * FROM t WHERE a =").to_string(),
        "Unexpected end of input at 1:26: expected string literal, number, TRUE, FALSE or NULL"
    );
    assert_eq!(
        parse_err("SELECT * FROM t WHERE a = 'x").to_string(),
        "Unterminated string literal at 1:27"
    );
}
