//! Query tokenizer implementation.

use super::{LexError, LexErrorKind, Position, Token, TokenKind};

/// A lexer that tokenizes query input.
///
/// The lexer is a lazy iterator: each call to `next` scans exactly one
/// token. It yields a single [`TokenKind::EndOfInput`] token at the end and
/// stops after that token or after the first error.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current position.
    pos: Position,
    /// The position of the start of the current token.
    start: Position,
    /// Set once the end-of-input token or an error has been produced.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: Position::start(),
            start: Position::start(),
            done: false,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos.offset..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos.offset..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos = self.pos.advance(c);
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while self
                .peek()
                .is_some_and(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
            {
                self.advance();
            }

            // Line comments: -- ... or // ...
            if matches!(
                (self.peek(), self.peek_next()),
                (Some('-'), Some('-')) | (Some('/'), Some('/'))
            ) {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // Block comments: /* ... */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let opener = self.pos;
                self.advance(); // /
                self.advance(); // *
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => {
                            return Err(LexError::new(
                                LexErrorKind::UnterminatedComment,
                                '/',
                                opener,
                            ));
                        }
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a token spanning from the token start to the current position.
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            &self.input[self.start.offset..self.pos.offset],
            self.start,
        )
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token<'a> {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[self.start.offset..self.pos.offset];
        self.make_token(TokenKind::keyword(text).unwrap_or(TokenKind::Identifier))
    }

    /// Scans a number: digits, optionally followed by `.` and more digits.
    fn scan_number(&mut self) -> Token<'a> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Scans a single-quoted string literal. The opening quote is already
    /// consumed.
    fn scan_string(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            match self.advance() {
                Some('\'') => {
                    // A doubled quote is an escaped quote.
                    if self.peek() == Some('\'') {
                        self.advance();
                    } else {
                        return Ok(self.make_token(TokenKind::StringLiteral));
                    }
                }
                Some(_) => {}
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        '\'',
                        self.start,
                    ));
                }
            }
        }
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` if no token rule matches at the current
    /// position, or if a string or block comment is left unterminated.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::EndOfInput));
        };

        let token = match c {
            // Single-character tokens
            '(' => self.make_token(TokenKind::LParen),
            ')' => self.make_token(TokenKind::RParen),
            ',' => self.make_token(TokenKind::Comma),
            '*' => self.make_token(TokenKind::Asterisk),
            '=' => self.make_token(TokenKind::Eq),

            // Potentially multi-character tokens
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::Lte)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::Neq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::Gte)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                self.make_token(TokenKind::Neq)
            }

            '\'' => self.scan_string()?,

            c if c.is_ascii_digit() => self.scan_number(),

            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            _ => return Err(LexError::unexpected(c, self.start)),
        };

        Ok(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl core::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes the entire input.
///
/// The returned vector always ends with the end-of-input token.
///
/// # Errors
///
/// Returns the first `LexError` encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).collect()
}
