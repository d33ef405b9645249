/// A cursor into source text, tracking char index, line, and column.
///
/// All counters are 0-based; reports render the line 1-based. `Copy`
/// semantics make span boundaries cheap independent snapshots: advancing
/// the live cursor never disturbs a position captured earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The cursor at the first character of the source.
    pub fn start() -> Self {
        Self::default()
    }

    /// Step past `ch`: index and column each grow by exactly 1.
    /// A newline additionally bumps the line and resets the column to 0.
    pub fn advance(&mut self, ch: char) {
        self.index += 1;
        self.column += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_index_and_column() {
        let mut pos = Position::start();
        pos.advance('a');
        pos.advance('b');
        assert_eq!(pos, Position { index: 2, line: 0, column: 2 });
    }

    #[test]
    fn test_newline_resets_column_and_bumps_line() {
        let mut pos = Position::start();
        pos.advance('a');
        pos.advance('\n');
        assert_eq!(pos, Position { index: 2, line: 1, column: 0 });

        pos.advance('b');
        assert_eq!(pos, Position { index: 3, line: 1, column: 1 });
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut pos = Position::start();
        pos.advance('a');
        let snapshot = pos;
        pos.advance('\n');
        pos.advance('b');

        assert_eq!(snapshot, Position { index: 1, line: 0, column: 1 });
        assert_eq!(pos, Position { index: 3, line: 1, column: 1 });
    }
}
