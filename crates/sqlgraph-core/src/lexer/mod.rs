//! Query Lexer/Tokenizer
//!
//! This module provides a hand-written lexer that produces a lazy stream of
//! position-tagged tokens.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::{LexError, LexErrorKind};
pub use span::{Position, Span};
pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, tokenize};
