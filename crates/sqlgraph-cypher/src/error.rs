//! Translation error types.

use sqlgraph_core::ParseError;

/// Errors that can occur while translating a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The query is empty or only whitespace.
    #[error("Query is empty")]
    Empty,

    /// The query uses a statement keyword that is never translated.
    #[error("Unsupported statement keyword: {0}")]
    UnsupportedStatement(String),

    /// The query could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TranslateError {
    /// Returns the parse error, if parsing is what failed.
    #[must_use]
    pub const fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}
