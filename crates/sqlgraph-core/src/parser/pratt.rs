//! Binding powers for the boolean operators of a condition.

use crate::ast::Condition;
use crate::lexer::TokenKind;

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
///
/// Returns `None` if the token is not a boolean connective.
#[must_use]
pub const fn infix_binding_power(kind: TokenKind) -> Option<(u8, u8)> {
    match kind {
        // Logical OR (lowest precedence)
        TokenKind::Or => Some((1, 2)),
        // Logical AND
        TokenKind::And => Some((3, 4)),
        _ => None,
    }
}

/// Joins two operands with the connective `kind`.
///
/// `kind` must be a token for which [`infix_binding_power`] returns `Some`.
#[must_use]
pub fn combine(kind: TokenKind, left: Condition, right: Condition) -> Condition {
    match kind {
        TokenKind::Or => left.or(right),
        _ => left.and(right),
    }
}
