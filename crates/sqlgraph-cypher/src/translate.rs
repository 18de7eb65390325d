//! Query screening and translation.

use std::time::{Duration, Instant};

use serde::Serialize;
use sqlgraph_core::lexer::LexErrorKind;
use sqlgraph_core::{Lexer, ParseOptions, TokenKind, check_length, parse_with_options};
use tracing::debug;

use crate::error::TranslateError;
use crate::render::to_cypher;

/// Length limit, in characters, applied by [`default_options`].
pub const MAX_QUERY_LENGTH: usize = 5000;

/// Statement keywords that are refused before parsing.
///
/// None of these are part of the query grammar; they are matched as whole
/// identifiers anywhere outside string literals.
pub const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "DROP", "DELETE", "UPDATE", "INSERT", "CREATE", "ALTER", "TRUNCATE", "GRANT", "REVOKE", "EXEC",
    "EXECUTE",
];

/// Parse options for translation: the parser defaults plus a
/// [`MAX_QUERY_LENGTH`] character limit.
#[must_use]
pub fn default_options() -> ParseOptions {
    ParseOptions::default().with_max_query_length(Some(MAX_QUERY_LENGTH))
}

/// A successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// The query text, with surrounding whitespace removed.
    pub sql: String,
    /// The Cypher text.
    pub cypher: String,
    /// Time spent parsing and rendering.
    pub elapsed: Duration,
}

impl Translation {
    /// Returns the elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Checks that `sql` is a candidate for translation without parsing it.
///
/// Surrounding whitespace is ignored, including for the length limit.
///
/// # Errors
///
/// - [`TranslateError::Empty`] for blank input.
/// - [`TranslateError::Parse`] with `ParseError::TooLong` for input over
///   the configured length limit.
/// - [`TranslateError::UnsupportedStatement`] if the text contains one of
///   [`UNSUPPORTED_KEYWORDS`].
///
/// Lexical errors are left for the parser to report.
pub fn screen(sql: &str, options: &ParseOptions) -> Result<(), TranslateError> {
    let sql = sql.trim();
    if sql.is_empty() {
        return Err(TranslateError::Empty);
    }

    if let Some(limit) = options.max_query_length {
        check_length(sql, limit)?;
    }

    match find_unsupported_keyword(sql) {
        Some(keyword) => Err(TranslateError::UnsupportedStatement(String::from(keyword))),
        None => Ok(()),
    }
}

/// Returns the first unsupported keyword used as an identifier in `sql`.
///
/// Scanning resumes after an unexpected character, so `t; DROP TABLE t`
/// still finds `DROP`. An unterminated string or comment ends the scan.
fn find_unsupported_keyword(sql: &str) -> Option<&'static str> {
    let mut rest = sql;
    loop {
        let mut resume = None;
        for token in Lexer::new(rest) {
            match token {
                Ok(token) if token.kind == TokenKind::Identifier => {
                    let keyword = UNSUPPORTED_KEYWORDS
                        .iter()
                        .find(|k| k.eq_ignore_ascii_case(token.text));
                    if keyword.is_some() {
                        return keyword.copied();
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    if err.kind == LexErrorKind::UnexpectedCharacter {
                        resume = Some(err.position.offset + err.character.len_utf8());
                    }
                }
            }
        }
        rest = &rest[resume?..];
    }
}

/// Screens, parses and translates a query.
///
/// The query is trimmed first; error positions refer to the trimmed text.
///
/// # Errors
///
/// Returns the first [`TranslateError`] encountered; see [`screen`].
pub fn translate(sql: &str, options: &ParseOptions) -> Result<Translation, TranslateError> {
    let sql = sql.trim();
    if let Err(err) = screen(sql, options) {
        debug!(%err, "query refused");
        return Err(err);
    }

    let start = Instant::now();
    let query = parse_with_options(sql, options)?;
    let cypher = to_cypher(&query);
    let elapsed = start.elapsed();

    debug!(elapsed_us = elapsed.as_micros(), "query translated");
    Ok(Translation {
        sql: String::from(sql),
        cypher,
        elapsed,
    })
}

/// A documented translation, used for help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    /// The input query.
    pub sql: &'static str,
    /// The expected Cypher output.
    pub cypher: &'static str,
    /// What the example shows.
    pub description: &'static str,
}

const EXAMPLES: &[Example] = &[
    Example {
        sql: "SELECT * FROM Users",
        cypher: "MATCH (n:Users)\nRETURN n",
        description: "Select every column",
    },
    Example {
        sql: "SELECT name, email FROM Users",
        cypher: "MATCH (n:Users)\nRETURN n.name, n.email",
        description: "Select specific columns",
    },
    Example {
        sql: "SELECT name FROM Users WHERE age > 18",
        cypher: "MATCH (n:Users)\nWHERE n.age > 18\nRETURN n.name",
        description: "Filter with a comparison",
    },
    Example {
        sql: "SELECT * FROM Users WHERE active = true AND role = 'admin'",
        cypher: "MATCH (n:Users)\nWHERE (n.active = true AND n.role = 'admin')\nRETURN n",
        description: "Filter with AND",
    },
    Example {
        sql: "SELECT name FROM Users WHERE age < 18 OR status = 'guest'",
        cypher: "MATCH (n:Users)\nWHERE (n.age < 18 OR n.status = 'guest')\nRETURN n.name",
        description: "Filter with OR",
    },
];

/// Returns the built-in example translations.
#[must_use]
pub const fn examples() -> &'static [Example] {
    EXAMPLES
}
