//! Parser error types.

use crate::lexer::{LexError, Position, Token, TokenKind};

/// The current token does not fit the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Unexpected {} at {position}: expected {}",
    describe_found(.found, .found_text),
    describe_expected(.expected)
)]
pub struct SyntaxError {
    /// Where the offending token starts.
    pub position: Position,
    /// The token kinds the grammar accepts at this point.
    pub expected: Vec<TokenKind>,
    /// The kind of the offending token.
    pub found: TokenKind,
    /// The source text of the offending token.
    pub found_text: String,
}

impl SyntaxError {
    /// Creates a syntax error for `found`.
    #[must_use]
    pub fn new(expected: &[TokenKind], found: &Token<'_>) -> Self {
        Self {
            position: found.position,
            expected: expected.to_vec(),
            found: found.kind,
            found_text: String::from(found.text),
        }
    }

    /// Returns true if `kind` is in the expected set.
    #[must_use]
    pub fn expects(&self, kind: TokenKind) -> bool {
        self.expected.contains(&kind)
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token did not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Parentheses in the condition nest deeper than allowed.
    #[error("Condition nesting exceeds the limit of {limit} at {position}")]
    TooDeep {
        /// The parenthesis that crossed the limit.
        position: Position,
        /// The configured limit.
        limit: usize,
    },

    /// The query text is longer than allowed.
    #[error("Query is {length} characters long, exceeding the limit of {limit}")]
    TooLong {
        /// The query length in characters.
        length: usize,
        /// The configured limit.
        limit: usize,
    },
}

impl ParseError {
    /// Returns the position of the failure, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Lex(e) => Some(e.position),
            Self::Syntax(e) => Some(e.position),
            Self::TooDeep { position, .. } => Some(*position),
            Self::TooLong { .. } => None,
        }
    }

    /// Returns the syntax error, if this is one.
    #[must_use]
    pub const fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the lexical error, if this is one.
    #[must_use]
    pub const fn as_lex(&self) -> Option<&LexError> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_found(kind: &TokenKind, text: &str) -> String {
    match kind {
        TokenKind::EndOfInput => String::from("end of input"),
        TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::Number => {
            format!("{kind} {text}")
        }
        _ => kind.to_string(),
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}
