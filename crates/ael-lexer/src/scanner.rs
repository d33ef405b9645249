use crate::diagnostic::Diagnostic;
use crate::position::Position;
use crate::token::{Span, Token, TokenKind};

/// AEL source scanner.
///
/// Walks the source one character at a time, tracking the current
/// [`Position`] and accumulating tokens. The whole input is consumed
/// eagerly; the first unrecognized character aborts the pass with a
/// diagnostic and no tokens.
pub struct Scanner {
    chars: Vec<char>,
    pos: Position,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: Position::start(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    ///
    /// The vector always ends with an [`TokenKind::Eof`] token positioned
    /// at the final cursor location.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, Diagnostic> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens()?;
        Ok(scanner.tokens)
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) -> Result<(), Diagnostic> {
        while let Some(ch) = self.peek() {
            match ch {
                // Whitespace carries no tokens; Position::advance does the
                // line/column bookkeeping on '\n'.
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }

                // scan_number leaves the cursor on the first non-number
                // character, so no advance here.
                '0'..='9' => self.scan_number()?,

                '+' => self.emit(TokenKind::Plus),
                '-' => self.emit(TokenKind::Minus),
                '*' => self.emit(TokenKind::Star),
                '/' => self.emit(TokenKind::Slash),
                '(' => self.emit(TokenKind::LParen),
                ')' => self.emit(TokenKind::RParen),

                _ => {
                    let start = self.pos;
                    self.advance();
                    return Err(Diagnostic::illegal_character(
                        Span::new(start, self.pos),
                        format!("'{ch}'"),
                    ));
                }
            }
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(self.pos, self.pos)));
        Ok(())
    }

    /// Scan an integer or float literal.
    ///
    /// Consumes consecutive digits and at most one `.`; a second `.` ends
    /// the literal without being consumed, and fails the next scanner step
    /// as an illegal character.
    fn scan_number(&mut self) -> Result<(), Diagnostic> {
        let start = self.pos;
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => {
                    text.push(ch);
                    self.advance();
                }
                '.' if !seen_dot => {
                    seen_dot = true;
                    text.push(ch);
                    self.advance();
                }
                _ => break,
            }
        }

        let span = Span::new(start, self.pos);
        let kind = if seen_dot {
            // Digits with a single dot always parse; "1." is 1.0.
            text.parse::<f64>().map(TokenKind::Float).map_err(|_| {
                Diagnostic::illegal_character(span, format!("invalid number literal '{text}'"))
            })?
        } else {
            // Can overflow: the literal may exceed the i64 range.
            text.parse::<i64>().map(TokenKind::Int).map_err(|_| {
                Diagnostic::illegal_character(span, format!("invalid number literal '{text}'"))
            })?
        };

        self.tokens.push(Token::new(kind, span));
        Ok(())
    }

    /// Emit a single-character token whose span covers exactly the
    /// current character, then advance past it.
    fn emit(&mut self, kind: TokenKind) {
        let start = self.pos;
        self.advance();
        self.tokens.push(Token::new(kind, Span::new(start, self.pos)));
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos.index).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos.advance(ch);
        }
    }
}
