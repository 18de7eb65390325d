//! Token types for the query lexer.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{Position, Span};

/// The kind of token.
///
/// Keywords are their own variants; literal and identifier tokens carry
/// their source text in [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Keywords
    Select,
    From,
    Where,
    And,
    Or,
    True,
    False,
    Null,

    // Comparison operators
    /// =
    Eq,
    /// <> or !=
    Neq,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    Lte,
    /// >=
    Gte,

    // Delimiters
    /// *
    Asterisk,
    /// ,
    Comma,
    /// (
    LParen,
    /// )
    RParen,

    // Literals and names
    /// Identifier (e.g., column_name)
    Identifier,
    /// String literal (e.g., 'hello')
    StringLiteral,
    /// Numeric literal (e.g., 42 or 3.14)
    Number,

    /// End of input
    EndOfInput,
}

impl TokenKind {
    /// Looks up a keyword (case-insensitive).
    ///
    /// Returns `None` for anything that is not one of the eight keywords.
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        const KEYWORDS: [(&str, TokenKind); 8] = [
            ("SELECT", TokenKind::Select),
            ("FROM", TokenKind::From),
            ("WHERE", TokenKind::Where),
            ("AND", TokenKind::And),
            ("OR", TokenKind::Or),
            ("TRUE", TokenKind::True),
            ("FALSE", TokenKind::False),
            ("NULL", TokenKind::Null),
        ];
        KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(text))
            .map(|(_, kind)| *kind)
    }

    /// Returns true for the kinds that may appear as a comparison value.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::StringLiteral | Self::Number | Self::True | Self::False | Self::Null
        )
    }

    /// Returns a human-readable name, as used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::Eq => "'='",
            Self::Neq => "'<>'",
            Self::Lt => "'<'",
            Self::Gt => "'>'",
            Self::Lte => "'<='",
            Self::Gte => "'>='",
            Self::Asterisk => "'*'",
            Self::Comma => "','",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Identifier => "identifier",
            Self::StringLiteral => "string literal",
            Self::Number => "number",
            Self::EndOfInput => "end of input",
        }
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its text and location in the source code.
///
/// `text` borrows the exact source slice, quotes included for string
/// literals. It is empty for [`TokenKind::EndOfInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token.
    pub text: &'a str,
    /// Where the token starts.
    pub position: Position,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, position: Position) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    /// Returns the byte span covered by this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.position.offset, self.position.offset + self.text.len())
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    /// Returns the content of a string literal with the surrounding quotes
    /// removed and doubled quotes collapsed.
    ///
    /// For any other kind the text is returned unchanged.
    #[must_use]
    pub fn unquoted(&self) -> Cow<'a, str> {
        if self.kind != TokenKind::StringLiteral || self.text.len() < 2 {
            return Cow::Borrowed(self.text);
        }
        let inner = &self.text[1..self.text.len() - 1];
        if inner.contains("''") {
            Cow::Owned(inner.replace("''", "'"))
        } else {
            Cow::Borrowed(inner)
        }
    }
}
