// Chunk: docs/chunks/token_model - Shared position type

/// Position in a document as (line, column).
///
/// `line` is 1-based and `col` is a 0-based character offset within the line
/// (not a byte offset), matching the indexing of the host text widget.
///
/// Positions order lexicographically: by line first, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The first position of a document (line 1, column 0).
    pub fn origin() -> Self {
        Self { line: 1, col: 0 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Position::default(), Position::new(1, 0));
    }

    #[test]
    fn test_orders_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(3, 2) < Position::new(3, 5));
        assert_eq!(Position::new(4, 4).cmp(&Position::new(4, 4)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(12, 3).to_string(), "12:3");
    }
}
