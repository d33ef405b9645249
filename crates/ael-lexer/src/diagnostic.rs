//! Positioned diagnostics for the AEL front end.
//!
//! One tagged type covers both failure classes (lexical and structural),
//! matched exhaustively at render time. The one-line `Display` form is
//! suitable for logs; [`Diagnostic::report`] produces the full block with
//! the offending source line and a `^` underline.

use std::fmt;

use thiserror::Error;

use crate::token::Span;

/// The failure class a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Lexical: a character the scanner does not recognize.
    IllegalCharacter,
    /// Structural: the wrong token where an operand, a closing
    /// parenthesis, or an operator was expected.
    InvalidSyntax,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::IllegalCharacter => write!(f, "Illegal Character"),
            DiagnosticKind::InvalidSyntax => write!(f, "Invalid Syntax"),
        }
    }
}

/// A diagnostic covering an exact source span.
///
/// The first diagnostic aborts the whole pass: no token stream or partial
/// tree is ever produced alongside one.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {detail}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub detail: String,
}

impl Diagnostic {
    /// Create a new lexical diagnostic.
    pub fn illegal_character(span: Span, detail: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::IllegalCharacter,
            span,
            detail: detail.into(),
        }
    }

    /// Create a new structural diagnostic.
    pub fn invalid_syntax(span: Span, detail: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::InvalidSyntax,
            span,
            detail: detail.into(),
        }
    }

    /// Render the full report: kind header and detail, source name and
    /// 1-based line number, then a caret excerpt of the covered line(s).
    ///
    /// `source` must be the text the diagnostic's span was produced from.
    pub fn report(&self, file: &str, source: &str) -> String {
        format!(
            "{}: {}\nFile {}, line {}\n\n{}",
            self.kind,
            self.detail,
            file,
            self.span.start.line + 1,
            underline(source, self.span),
        )
    }
}

/// Render every source line covered by `span`, each followed by a line of
/// spaces and `^` carets marking the covered columns. Zero-width spans
/// (such as one at end of input) still get a single caret.
fn underline(source: &str, span: Span) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let first = span.start.line.min(lines.len() - 1);
    let last = span.end.line.min(lines.len() - 1).max(first);

    let mut out = String::new();
    for (row, line) in lines[first..=last].iter().enumerate().map(|(i, l)| (first + i, l)) {
        let width = line.chars().count();
        let col_start = if row == span.start.line {
            span.start.column.min(width)
        } else {
            0
        };
        let col_end = if row == span.end.line {
            span.end.column.min(width)
        } else {
            width
        };

        out.push_str(line);
        out.push('\n');
        out.push_str(&" ".repeat(col_start));
        out.push_str(&"^".repeat(col_end.saturating_sub(col_start).max(1)));
        if row < last {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use pretty_assertions::assert_eq;

    fn span_at(start_index: usize, start_col: usize, len: usize) -> Span {
        let start = Position { index: start_index, line: 0, column: start_col };
        let end = Position { index: start_index + len, line: 0, column: start_col + len };
        Span::new(start, end)
    }

    #[test]
    fn test_display_is_one_line() {
        let diag = Diagnostic::illegal_character(span_at(2, 2, 1), "'&'");
        assert_eq!(diag.to_string(), "Illegal Character: '&'");
    }

    #[test]
    fn test_report_header_and_line_number() {
        let diag = Diagnostic::illegal_character(span_at(2, 2, 1), "'&'");
        let report = diag.report("<stdin>", "5 & 3");
        assert!(report.starts_with("Illegal Character: '&'\nFile <stdin>, line 1\n\n"));
    }

    #[test]
    fn test_caret_aligned_under_span() {
        let diag = Diagnostic::illegal_character(span_at(2, 2, 1), "'&'");
        let report = diag.report("<stdin>", "5 & 3");
        assert!(report.ends_with("5 & 3\n  ^"));
    }

    #[test]
    fn test_wide_span_gets_caret_run() {
        let diag = Diagnostic::invalid_syntax(span_at(4, 4, 3), "expected an integer or float");
        let report = diag.report("<stdin>", "1 + abc");
        assert!(report.ends_with("1 + abc\n    ^^^"));
    }

    #[test]
    fn test_zero_width_span_renders_one_caret() {
        // An end-of-input span: start == end, one column past the last char.
        let eof = Position { index: 6, line: 0, column: 6 };
        let diag = Diagnostic::invalid_syntax(Span::new(eof, eof), "expected ')'");
        let report = diag.report("<stdin>", "(1 + 2");
        assert!(report.ends_with("(1 + 2\n      ^"));
    }

    #[test]
    fn test_span_on_second_line() {
        let start = Position { index: 6, line: 1, column: 2 };
        let end = Position { index: 7, line: 1, column: 3 };
        let diag = Diagnostic::illegal_character(Span::new(start, end), "'&'");
        let report = diag.report("<stdin>", "1 +\n2 & 3");
        assert!(report.contains("line 2"));
        assert!(report.ends_with("2 & 3\n  ^"));
    }

    #[test]
    fn test_multi_line_span_underlines_each_line() {
        let start = Position { index: 2, line: 0, column: 2 };
        let end = Position { index: 7, line: 1, column: 3 };
        let diag = Diagnostic::invalid_syntax(Span::new(start, end), "detail");
        let report = diag.report("<stdin>", "1 +\n2 +\n3");
        assert!(report.ends_with("1 +\n  ^\n2 +\n^^^"));
    }
}
