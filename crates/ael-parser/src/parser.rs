//! Recursive-descent parser for AEL expressions.
//!
//! Grammar, lowest precedence first; both binary tiers are
//! left-associative and share one fold loop:
//!
//! ```text
//! expr   := term   (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-') factor
//!         | INT | FLOAT
//!         | '(' expr ')'
//! ```

use ael_lexer::{Diagnostic, Scanner, Token, TokenKind};

use crate::ast::Expr;

/// AEL expression parser.
///
/// Consumes the scanner's token stream and builds one [`Expr`] tree.
/// Every production returns `Result`; the first diagnostic propagates out
/// without any further token consumption or node construction.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for the given tokens.
    ///
    /// The stream must be terminated by an `Eof` token, as produced by
    /// [`Scanner::tokenize`].
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse source text into an expression tree.
    ///
    /// Runs the scanner and then the grammar; the input must contain
    /// exactly one complete expression.
    pub fn parse(source: &str) -> Result<Expr, Diagnostic> {
        let tokens = Scanner::tokenize(source)?;
        let mut parser = Parser::new(tokens);
        parser.parse_expression()
    }

    /// Parse one top-level expression and require the stream to be fully
    /// consumed.
    pub fn parse_expression(&mut self) -> Result<Expr, Diagnostic> {
        let expr = self.expr()?;

        if !matches!(self.peek().kind, TokenKind::Eof) {
            return Err(Diagnostic::invalid_syntax(
                self.peek().span,
                "expected an operator (+, -, *, /)",
            ));
        }

        Ok(expr)
    }

    // =========================================================================
    // Productions
    // =========================================================================

    fn expr(&mut self) -> Result<Expr, Diagnostic> {
        self.binary_op(Self::term, |kind| {
            matches!(kind, TokenKind::Plus | TokenKind::Minus)
        })
    }

    fn term(&mut self) -> Result<Expr, Diagnostic> {
        self.binary_op(Self::factor, |kind| {
            matches!(kind, TokenKind::Star | TokenKind::Slash)
        })
    }

    fn factor(&mut self) -> Result<Expr, Diagnostic> {
        let token = self.peek().clone();

        match token.kind {
            // Right-recursive, so unary operators chain (`--5`) and bind
            // tighter than any binary operator.
            TokenKind::Plus | TokenKind::Minus => {
                self.advance();
                let operand = self.factor()?;
                Ok(Expr::Unary {
                    op: token,
                    operand: Box::new(operand),
                })
            }

            TokenKind::Int(_) | TokenKind::Float(_) => {
                self.advance();
                Ok(Expr::Number(token))
            }

            // Parentheses group without creating a node.
            TokenKind::LParen => {
                self.advance();
                let inner = self.expr()?;
                if matches!(self.peek().kind, TokenKind::RParen) {
                    self.advance();
                    Ok(inner)
                } else {
                    Err(Diagnostic::invalid_syntax(self.peek().span, "expected ')'"))
                }
            }

            _ => Err(Diagnostic::invalid_syntax(
                token.span,
                "expected an integer or float",
            )),
        }
    }

    /// Shared loop for the left-associative binary tiers: parse one
    /// operand, then fold `(op operand)*` into nested `Binary` nodes.
    fn binary_op(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, Diagnostic>,
        accepts: fn(&TokenKind) -> bool,
    ) -> Result<Expr, Diagnostic> {
        let mut left = operand(self)?;

        while accepts(&self.peek().kind) {
            let op = self.peek().clone();
            self.advance();
            let right = operand(self)?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Step to the next token; the cursor never moves past the trailing
    /// `Eof`.
    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }
}
