//! Operator binding powers and operator classes.
//!
//! Precedence bands, high to low: unary/update (16), exponent (15),
//! multiplicative (14), additive (13), shift (12), relational (11),
//! equality (10), bitwise AND (9), XOR (8), OR (7), logical AND (6) and
//! logical OR (5).

use esfront_ast::syntax_kind::SyntaxKind;
use esfront_tokenizer::Token;

pub const UNARY: u8 = 16;
pub const LOWEST_BINARY: u8 = 5;

/// The binding power of `token` as an infix operator.
pub fn binary_precedence(token: &Token<'_>) -> Option<u8> {
    if token.kind != SyntaxKind::Operator {
        return None;
    }
    token.precedence.filter(|p| (LOWEST_BINARY..UNARY).contains(p))
}

/// `**` groups right to left; every other binary operator groups left to right.
pub fn is_right_associative(operator: &str) -> bool {
    operator == "**"
}

/// Operators built as `LogicalExpression`. The bitwise `&`, `|` and `^`
/// spellings containing `&` or `|` are grouped with the logical ones.
pub fn is_logical(operator: &str) -> bool {
    operator.contains('&') || operator.contains('|')
}

pub fn is_update(operator: &str) -> bool {
    operator == "++" || operator == "--"
}

/// Operators that may start an expression as a prefix.
pub fn is_prefix(operator: &str) -> bool {
    matches!(operator, "!" | "~" | "+" | "-" | "typeof" | "void" | "delete") || is_update(operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_classes() {
        assert!(is_logical("&&"));
        assert!(is_logical("|"));
        assert!(!is_logical("^"));
        assert!(is_right_associative("**"));
        assert!(!is_right_associative("*"));
        assert!(is_prefix("typeof"));
        assert!(is_prefix("-"));
        assert!(!is_prefix("*"));
        assert!(is_update("--"));
    }
}
