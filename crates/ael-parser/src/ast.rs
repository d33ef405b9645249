//! Abstract syntax tree for AEL expressions.
//!
//! A closed sum over exactly three node shapes. Each node exclusively
//! owns its children; operator and literal nodes keep their originating
//! tokens, so every node can report the source region it covers.

use std::fmt;

use ael_lexer::{Span, Token};

/// A node in the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer or float literal, carrying its originating token.
    Number(Token),

    /// Unary `+` or `-` applied to a single operand.
    Unary { op: Token, operand: Box<Expr> },

    /// Binary arithmetic: `left op right`.
    Binary {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    /// The source region this node covers, from its leftmost token to its
    /// rightmost.
    pub fn span(&self) -> Span {
        match self {
            Expr::Number(token) => token.span,
            Expr::Unary { op, operand } => Span::new(op.span.start, operand.span().end),
            Expr::Binary { left, right, .. } => Span::new(left.span().start, right.span().end),
        }
    }
}

impl fmt::Display for Expr {
    /// Parenthesized tree form: `2 + 3 * 4` renders as `(2 + (3 * 4))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(token) => write!(f, "{}", token.kind),
            Expr::Unary { op, operand } => write!(f, "({}{})", op.kind, operand),
            Expr::Binary { left, op, right } => write!(f, "({} {} {})", left, op.kind, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;

    fn rendered(source: &str) -> String {
        Parser::parse(source).unwrap().to_string()
    }

    #[test]
    fn test_display_literal() {
        assert_eq!(rendered("42"), "42");
        assert_eq!(rendered("3.14"), "3.14");
    }

    #[test]
    fn test_display_nests_by_precedence() {
        assert_eq!(rendered("2 + 3 * 4"), "(2 + (3 * 4))");
    }

    #[test]
    fn test_display_unary_chain() {
        assert_eq!(rendered("--5"), "(-(-5))");
    }

    #[test]
    fn test_span_covers_whole_expression() {
        let expr = Parser::parse("10 - 2 - 3").unwrap();
        let span = expr.span();
        assert_eq!(span.start.index, 0);
        assert_eq!(span.end.index, 10);
    }

    #[test]
    fn test_span_of_unary_reaches_operand_end() {
        let expr = Parser::parse("-12").unwrap();
        let span = expr.span();
        assert_eq!(span.start.index, 0);
        assert_eq!(span.end.index, 3);
    }
}
