//! Query parser implementation.

use tracing::{debug, trace};

use super::error::{ParseError, SyntaxError};
use super::pratt::{combine, infix_binding_power};
use crate::ast::{
    ColumnSelector, ComparisonOp, Condition, Identifier, Literal, Query, SelectStatement,
};
use crate::lexer::{Lexer, Position, Token, TokenKind};
use crate::options::ParseOptions;

const COMPARISON_OPS: &[TokenKind] = &[
    TokenKind::Eq,
    TokenKind::Neq,
    TokenKind::Lt,
    TokenKind::Gt,
    TokenKind::Lte,
    TokenKind::Gte,
];

/// Every kind for which [`TokenKind::is_literal`] holds.
const LITERALS: &[TokenKind] = &[
    TokenKind::StringLiteral,
    TokenKind::Number,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
];

/// Query parser.
///
/// A parser reads exactly one query: [`Parser::parse_query`] consumes it.
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    current: Token<'a>,
    options: ParseOptions,
    /// Current parenthesis nesting depth.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Creates a new parser for the given input.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
            // Placeholder until the first token is read.
            current: Token::new(TokenKind::EndOfInput, "", Position::start()),
            options,
            depth: 0,
        }
    }

    /// Parses the input as a single query.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` describing the first point of failure: an
    /// input over the length limit, a lexical error, a token the grammar
    /// does not accept, or parentheses nested past the depth limit.
    pub fn parse_query(mut self) -> Result<Query, ParseError> {
        if let Some(limit) = self.options.max_query_length {
            check_length(self.input, limit)?;
        }

        self.advance()?;
        let statement = self.parse_select_statement()?;

        // Trailing tokens: report what could have continued the statement.
        let follow: &[TokenKind] = if statement.filter.is_some() {
            &[TokenKind::And, TokenKind::Or, TokenKind::EndOfInput]
        } else {
            &[TokenKind::Where, TokenKind::EndOfInput]
        };
        if !self.check(TokenKind::EndOfInput) {
            return Err(self.unexpected(follow));
        }

        Ok(Query::new(statement))
    }

    /// Parses `SELECT <columns> FROM <table> [WHERE <condition>]`.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect(TokenKind::Select, &[TokenKind::Select])?;

        let columns = self.parse_select_list()?;

        let expected: &[TokenKind] = if columns.is_all() {
            &[TokenKind::From]
        } else {
            &[TokenKind::Comma, TokenKind::From]
        };
        self.expect(TokenKind::From, expected)?;

        let table = self.expect_identifier(&[TokenKind::Identifier])?;

        let filter = if self.check(TokenKind::Where) {
            self.advance()?;
            Some(self.parse_condition(0)?)
        } else {
            None
        };

        Ok(SelectStatement {
            columns,
            table,
            filter,
        })
    }

    /// Parses `*` or a comma-separated list of column names.
    fn parse_select_list(&mut self) -> Result<ColumnSelector, ParseError> {
        if self.check(TokenKind::Asterisk) {
            self.advance()?;
            return Ok(ColumnSelector::All);
        }

        let first = self.expect_identifier(&[TokenKind::Asterisk, TokenKind::Identifier])?;
        let mut columns = vec![first];
        while self.check(TokenKind::Comma) {
            self.advance()?;
            columns.push(self.expect_identifier(&[TokenKind::Identifier])?);
        }

        Ok(ColumnSelector::Explicit(columns))
    }

    /// Parses a condition using precedence climbing.
    ///
    /// Only connectives whose left binding power is at least `min_bp` are
    /// folded into the result; weaker ones are left for the caller.
    fn parse_condition(&mut self, min_bp: u8) -> Result<Condition, ParseError> {
        let mut left = self.parse_atom()?;

        loop {
            let op = self.current.kind;
            let Some((l_bp, r_bp)) = infix_binding_power(op) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            self.advance()?;
            let right = self.parse_condition(r_bp)?;
            left = combine(op, left, right);
        }

        Ok(left)
    }

    /// Parses a comparison or a parenthesized condition.
    fn parse_atom(&mut self) -> Result<Condition, ParseError> {
        match self.current.kind {
            TokenKind::LParen => {
                if self.depth >= self.options.max_depth {
                    return Err(ParseError::TooDeep {
                        position: self.current.position,
                        limit: self.options.max_depth,
                    });
                }
                self.depth += 1;
                self.advance()?;
                let inner = self.parse_condition(0)?;
                self.expect(
                    TokenKind::RParen,
                    &[TokenKind::And, TokenKind::Or, TokenKind::RParen],
                )?;
                self.depth -= 1;
                Ok(inner)
            }
            TokenKind::Identifier => self.parse_comparison(),
            _ => Err(self.unexpected(&[TokenKind::Identifier, TokenKind::LParen])),
        }
    }

    /// Parses `column operator value`.
    fn parse_comparison(&mut self) -> Result<Condition, ParseError> {
        let column = self.expect_identifier(&[TokenKind::Identifier])?;

        let Some(operator) = ComparisonOp::from_token(self.current.kind) else {
            return Err(self.unexpected(COMPARISON_OPS));
        };
        self.advance()?;

        let value = self.parse_literal()?;

        Ok(Condition::Comparison {
            column,
            operator,
            value,
        })
    }

    /// Parses a literal value. Classification follows the token kind only.
    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        if !self.current.kind.is_literal() {
            return Err(self.unexpected(LITERALS));
        }
        let token = self.advance()?;
        Ok(match token.kind {
            TokenKind::StringLiteral => Literal::Str(token.unquoted().into_owned()),
            TokenKind::Number => Literal::Num(String::from(token.text)),
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            _ => Literal::Null,
        })
    }

    // --- Helper methods ---

    /// Advances to the next token and returns the one just consumed.
    fn advance(&mut self) -> Result<Token<'a>, ParseError> {
        let next = match self.lexer.next() {
            Some(token) => token?,
            None => Token::new(TokenKind::EndOfInput, "", self.current.position),
        };
        trace!(kind = ?next.kind, text = next.text, position = %next.position, "token");
        Ok(core::mem::replace(&mut self.current, next))
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Builds a syntax error at the current token.
    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        ParseError::Syntax(SyntaxError::new(expected, &self.current))
    }

    /// Expects the current token to be the given kind.
    ///
    /// `expected` is the full set reported on failure.
    fn expect(&mut self, kind: TokenKind, expected: &[TokenKind]) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self, expected: &[TokenKind]) -> Result<Identifier, ParseError> {
        if self.check(TokenKind::Identifier) {
            let token = self.advance()?;
            Ok(Identifier::new(token.text))
        } else {
            Err(self.unexpected(expected))
        }
    }
}

/// Fails with [`ParseError::TooLong`] if `input` has more than `limit`
/// characters.
///
/// # Errors
///
/// Returns `ParseError::TooLong` carrying the character count.
pub fn check_length(input: &str, limit: usize) -> Result<(), ParseError> {
    // A string never has more chars than bytes.
    if input.len() <= limit {
        return Ok(());
    }
    let length = input.chars().count();
    if length > limit {
        return Err(ParseError::TooLong { length, limit });
    }
    Ok(())
}

/// Parses a query with the default [`ParseOptions`].
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse(input: &str) -> Result<Query, ParseError> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses a query with the given options.
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Query, ParseError> {
    debug!(length = input.len(), "parsing query");
    let result = Parser::with_options(input, options.clone()).parse_query();
    match &result {
        Ok(query) => debug!(table = %query.statement.table, "query parsed"),
        Err(err) => debug!(%err, "query rejected"),
    }
    result
}
