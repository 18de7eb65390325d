//! Lexical error types.

use super::Position;

/// Why the lexer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token rule matches the character.
    UnexpectedCharacter,
    /// A string literal reached end of input without its closing quote.
    UnterminatedString,
    /// A block comment reached end of input without `*/`.
    UnterminatedComment,
}

/// A lexical error: the input could not be split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} at {position}", describe(.kind, .character))]
pub struct LexError {
    /// Where the offending character (or opening delimiter) sits.
    pub position: Position,
    /// The offending character.
    pub character: char,
    /// What went wrong.
    pub kind: LexErrorKind,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub const fn new(kind: LexErrorKind, character: char, position: Position) -> Self {
        Self {
            position,
            character,
            kind,
        }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub const fn unexpected(character: char, position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter, character, position)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe(kind: &LexErrorKind, character: &char) -> String {
    match kind {
        LexErrorKind::UnexpectedCharacter => format!("Unexpected character {character:?}"),
        LexErrorKind::UnterminatedString => String::from("Unterminated string literal"),
        LexErrorKind::UnterminatedComment => String::from("Unterminated block comment"),
    }
}
