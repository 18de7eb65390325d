//! Filter condition AST types.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::lexer::TokenKind;

/// A column or table name, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

impl ComparisonOp {
    /// Converts an operator token to a comparison operator.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Eq => Some(Self::Eq),
            TokenKind::Neq => Some(Self::Neq),
            TokenKind::Lt => Some(Self::Lt),
            TokenKind::Gt => Some(Self::Gt),
            TokenKind::Lte => Some(Self::Lte),
            TokenKind::Gte => Some(Self::Gte),
            _ => None,
        }
    }

    /// Returns the canonical query representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "<>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Gte => ">=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    /// String literal, quotes removed and escapes resolved.
    Str(String),
    /// Numeric literal, kept verbatim.
    Num(String),
    /// Boolean literal.
    Bool(bool),
    /// NULL literal.
    Null,
}

impl Literal {
    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates a numeric literal from its source text.
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::Num(text.into())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Num(n) => f.write_str(n),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

/// A boolean filter condition.
///
/// `And` and `Or` are always binary. Chains of the same operator are
/// left-nested: `a AND b AND c` is `And(And(a, b), c)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// `column operator value`.
    Comparison {
        /// The column being tested.
        column: Identifier,
        /// The comparison operator.
        operator: ComparisonOp,
        /// The value compared against.
        value: Literal,
    },
    /// Logical AND.
    And(Box<Condition>, Box<Condition>),
    /// Logical OR.
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// Creates a comparison condition.
    #[must_use]
    pub fn comparison(
        column: impl Into<Identifier>,
        operator: ComparisonOp,
        value: Literal,
    ) -> Self {
        Self::Comparison {
            column: column.into(),
            operator,
            value,
        }
    }

    /// Combines two conditions with AND.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        Self::And(Box::new(self), Box::new(right))
    }

    /// Combines two conditions with OR.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        Self::Or(Box::new(self), Box::new(right))
    }

    /// Returns the binding strength of the node (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or(..) => 1,
            Self::And(..) => 2,
            Self::Comparison { .. } => 3,
        }
    }

    /// Returns the columns tested by this condition, left to right.
    #[must_use]
    pub fn columns(&self) -> Vec<&Identifier> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a Identifier>) {
        match self {
            Self::Comparison { column, .. } => out.push(column),
            Self::And(left, right) | Self::Or(left, right) => {
                left.collect_columns(out);
                right.collect_columns(out);
            }
        }
    }
}

/// Writes `left op right`, parenthesizing operands only where needed to
/// keep the tree shape when the text is parsed again.
fn write_binary(
    f: &mut fmt::Formatter<'_>,
    left: &Condition,
    op: &str,
    right: &Condition,
    precedence: u8,
) -> fmt::Result {
    write_operand(f, left, left.precedence() < precedence)?;
    write!(f, " {op} ")?;
    write_operand(f, right, right.precedence() <= precedence)
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Condition, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison {
                column,
                operator,
                value,
            } => write!(f, "{column} {operator} {value}"),
            Self::And(left, right) => write_binary(f, left, "AND", right, self.precedence()),
            Self::Or(left, right) => write_binary(f, left, "OR", right, self.precedence()),
        }
    }
}
