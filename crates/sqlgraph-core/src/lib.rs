//! # sqlgraph-core
//!
//! A parser for a small, single-statement SQL dialect:
//!
//! ```text
//! SELECT <* | col, col, ...> FROM <table> [WHERE <condition>]
//! ```
//!
//! where a condition combines `column <op> literal` comparisons with `AND`,
//! `OR` and parentheses. `AND` binds tighter than `OR`; both associate left.
//!
//! This crate provides:
//! - A hand-written lexer producing position-tagged tokens
//! - A recursive descent parser with precedence climbing for conditions
//! - An owned AST whose `Display` output parses back to the same tree
//!
//! ## Parsing
//!
//! ```rust
//! use sqlgraph_core::ast::{ColumnSelector, Condition};
//!
//! let query = sqlgraph_core::parse("select name FROM Users WHERE age > 18 AND active = true")
//!     .unwrap();
//!
//! assert!(matches!(query.statement.columns, ColumnSelector::Explicit(_)));
//! assert_eq!(query.statement.table, "Users");
//! assert!(matches!(query.statement.filter, Some(Condition::And(..))));
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT name FROM Users WHERE age > 18 AND active = TRUE"
//! );
//! ```
//!
//! ## Diagnostics
//!
//! Parsing stops at the first problem and reports where it is and what the
//! grammar would have accepted there:
//!
//! ```rust
//! use sqlgraph_core::{ParseError, TokenKind};
//!
//! let err = sqlgraph_core::parse("SELECT FROM t").unwrap_err();
//! let ParseError::Syntax(syntax) = &err else { panic!() };
//! assert_eq!(syntax.expected, vec![TokenKind::Asterisk, TokenKind::Identifier]);
//! assert_eq!(err.to_string(), "Unexpected FROM at 1:8: expected '*' or identifier");
//! ```

pub mod ast;
pub mod lexer;
pub mod options;
pub mod parser;

pub use ast::{ColumnSelector, ComparisonOp, Condition, Identifier, Literal, Query, SelectStatement};
pub use lexer::{LexError, Lexer, Position, Span, Token, TokenKind, tokenize};
pub use options::ParseOptions;
pub use parser::{
    ParseError, Parser, SyntaxError, check_length, parse, parse_with_options,
};
