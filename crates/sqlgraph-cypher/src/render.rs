//! Cypher text generation.

use sqlgraph_core::ast::{ColumnSelector, Condition, Literal, Query};

/// The variable bound to the matched node.
const NODE: &str = "n";

/// Converts a table name into a node label.
///
/// The first character is upper-cased and the rest lower-cased, so
/// `users`, `USERS` and `Users` all map to `Users`.
#[must_use]
pub fn label(table: &str) -> String {
    let mut chars = table.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    first
        .to_uppercase()
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

/// Renders a query as Cypher.
#[must_use]
pub fn to_cypher(query: &Query) -> String {
    let mut writer = CypherWriter::new();
    writer.write_query(query);
    writer.finish()
}

/// Accumulates Cypher text for a query.
#[derive(Debug, Default)]
pub struct CypherWriter {
    out: String,
}

impl CypherWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { out: String::new() }
    }

    /// Writes the `MATCH`, optional `WHERE` and `RETURN` lines of `query`.
    pub fn write_query(&mut self, query: &Query) {
        let statement = &query.statement;

        self.out.push_str("MATCH (");
        self.out.push_str(NODE);
        self.out.push(':');
        self.out.push_str(&label(statement.table.as_str()));
        self.out.push(')');

        if let Some(filter) = &statement.filter {
            self.out.push_str("\nWHERE ");
            self.write_condition(filter);
        }

        self.out.push_str("\nRETURN ");
        self.write_return(&statement.columns);
    }

    /// Writes a condition, parenthesizing every `AND`/`OR`.
    pub fn write_condition(&mut self, condition: &Condition) {
        match condition {
            Condition::Comparison {
                column,
                operator,
                value,
            } => {
                self.write_property(column.as_str());
                self.out.push(' ');
                self.out.push_str(operator.as_str());
                self.out.push(' ');
                self.write_literal(value);
            }
            Condition::And(left, right) => self.write_connective(left, "AND", right),
            Condition::Or(left, right) => self.write_connective(left, "OR", right),
        }
    }

    fn write_connective(&mut self, left: &Condition, op: &str, right: &Condition) {
        self.out.push('(');
        self.write_condition(left);
        self.out.push(' ');
        self.out.push_str(op);
        self.out.push(' ');
        self.write_condition(right);
        self.out.push(')');
    }

    /// Writes a literal in Cypher syntax.
    pub fn write_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Str(s) => {
                self.out.push('\'');
                for c in s.chars() {
                    if matches!(c, '\\' | '\'') {
                        self.out.push('\\');
                    }
                    self.out.push(c);
                }
                self.out.push('\'');
            }
            Literal::Num(n) => self.out.push_str(n),
            Literal::Bool(true) => self.out.push_str("true"),
            Literal::Bool(false) => self.out.push_str("false"),
            Literal::Null => self.out.push_str("null"),
        }
    }

    fn write_return(&mut self, columns: &ColumnSelector) {
        match columns {
            ColumnSelector::All => self.out.push_str(NODE),
            ColumnSelector::Explicit(columns) => {
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_property(column.as_str());
                }
            }
        }
    }

    fn write_property(&mut self, name: &str) {
        self.out.push_str(NODE);
        self.out.push('.');
        self.out.push_str(name);
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
