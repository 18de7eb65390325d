//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Default limit on parenthesis nesting inside a WHERE condition.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while parsing a query.
///
/// Deserializes with every field optional, so an application can embed it
/// in its own configuration file:
///
/// ```rust
/// use sqlgraph_core::ParseOptions;
///
/// let options: ParseOptions = serde_json::from_str(r#"{ "max_depth": 16 }"#).unwrap();
/// assert_eq!(options.max_depth, 16);
/// assert_eq!(options.max_query_length, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum parenthesis nesting depth in a condition.
    pub max_depth: usize,
    /// Maximum query length in characters (`None` = unlimited).
    pub max_query_length: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_query_length: None,
        }
    }
}

impl ParseOptions {
    /// Creates options with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum parenthesis nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum query length in characters.
    #[must_use]
    pub const fn with_max_query_length(mut self, max_query_length: Option<usize>) -> Self {
        self.max_query_length = max_query_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::new();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.max_query_length, None);
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::new()
            .with_max_depth(4)
            .with_max_query_length(None);
        assert_eq!(options.max_depth, 4);
        assert_eq!(options.max_query_length, None);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ParseOptions =
            serde_json::from_str(r#"{ "max_query_length": 64 }"#).unwrap();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.max_query_length, Some(64));
    }
}
