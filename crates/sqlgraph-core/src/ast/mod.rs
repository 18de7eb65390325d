//! Abstract Syntax Tree (AST) types for queries.
//!
//! Every node owns its children. `Display` renders canonical query text
//! that parses back to an identical tree.

mod condition;
mod statement;

pub use condition::{ComparisonOp, Condition, Identifier, Literal};
pub use statement::{ColumnSelector, Query, SelectStatement};
