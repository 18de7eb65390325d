//! Query statement AST types.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::condition::{Condition, Identifier};

/// The column-selection clause of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SerializedColumns")]
pub enum ColumnSelector {
    /// `SELECT *`.
    All,
    /// An explicit, ordered, non-empty column list.
    Explicit(Vec<Identifier>),
}

/// Wire form of [`ColumnSelector`], checked on the way in.
#[derive(Deserialize)]
enum SerializedColumns {
    All,
    Explicit(Vec<Identifier>),
}

impl TryFrom<SerializedColumns> for ColumnSelector {
    type Error = &'static str;

    fn try_from(columns: SerializedColumns) -> Result<Self, Self::Error> {
        match columns {
            SerializedColumns::All => Ok(Self::All),
            SerializedColumns::Explicit(columns) => {
                Self::explicit(columns).ok_or("explicit column list must not be empty")
            }
        }
    }
}

impl ColumnSelector {
    /// Creates an explicit column list.
    ///
    /// Returns `None` if `columns` is empty.
    #[must_use]
    pub fn explicit<I, C>(columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Identifier>,
    {
        let columns: Vec<Identifier> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            None
        } else {
            Some(Self::Explicit(columns))
        }
    }

    /// Returns true for `*`.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns the explicitly selected columns (empty for `*`).
    #[must_use]
    pub fn columns(&self) -> &[Identifier] {
        match self {
            Self::All => &[],
            Self::Explicit(columns) => columns,
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("*"),
            Self::Explicit(columns) => {
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{column}")?;
                }
                Ok(())
            }
        }
    }
}

/// A `SELECT ... FROM ... [WHERE ...]` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectStatement {
    /// Selected columns.
    pub columns: ColumnSelector,
    /// The table read from.
    pub table: Identifier,
    /// The WHERE condition, if any.
    pub filter: Option<Condition>,
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.columns, self.table)?;
        if let Some(filter) = &self.filter {
            write!(f, " WHERE {filter}")?;
        }
        Ok(())
    }
}

/// The root of a parsed query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    /// The single statement of the query.
    pub statement: SelectStatement,
}

impl Query {
    /// Wraps a statement into a query.
    #[must_use]
    pub const fn new(statement: SelectStatement) -> Self {
        Self { statement }
    }
}

impl From<SelectStatement> for Query {
    fn from(statement: SelectStatement) -> Self {
        Self::new(statement)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.statement)
    }
}
