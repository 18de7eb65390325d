//! # sqlgraph-cypher
//!
//! Translates queries parsed by `sqlgraph-core` into Cypher, the query
//! language of the Neo4j graph database.
//!
//! # Mapping
//!
//! - The table becomes a node label: `FROM users` matches `(n:Users)`.
//! - `SELECT *` returns the whole node; a column list returns properties
//!   of the node (`RETURN n.name, n.email`).
//! - Every comparison tests a property of the node. `AND` and `OR` are
//!   always fully parenthesized in the output.
//!
//! ## Example
//!
//! ```rust
//! let translation = sqlgraph_cypher::translate(
//!     "SELECT name FROM users WHERE age < 18 OR status = 'guest'",
//!     &sqlgraph_cypher::default_options(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     translation.cypher,
//!     "MATCH (n:Users)\nWHERE (n.age < 18 OR n.status = 'guest')\nRETURN n.name"
//! );
//! ```
//!
//! Queries longer than [`MAX_QUERY_LENGTH`] characters and statements that
//! would modify data are turned away before parsing:
//!
//! ```rust
//! use sqlgraph_cypher::{TranslateError, default_options};
//!
//! let err = sqlgraph_cypher::translate("DROP TABLE users", &default_options()).unwrap_err();
//! assert!(matches!(err, TranslateError::UnsupportedStatement(ref word) if word == "DROP"));
//! ```

mod error;
mod render;
mod translate;

pub use error::TranslateError;
pub use render::{CypherWriter, label, to_cypher};
pub use translate::{
    Example, MAX_QUERY_LENGTH, Translation, UNSUPPORTED_KEYWORDS, default_options, examples, screen,
    translate,
};
