//! AEL Parser
//!
//! Parses a token stream into an expression tree.
//! [`Parser::parse`] is the front-end entry point: it runs the scanner
//! over the source and then builds one [`Expr`] by recursive descent, or
//! returns the first [`ael_lexer::Diagnostic`] encountered in either
//! phase. Failure is strictly fail-fast: no partial tree accompanies an
//! error.

pub mod ast;
pub mod parser;

pub use ast::Expr;
pub use parser::Parser;
