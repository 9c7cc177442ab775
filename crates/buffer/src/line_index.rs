// Chunk: docs/chunks/tag_layer - Line index for position/offset translation

//! Line index for translating between document positions and character offsets.
//!
//! Maintains an array of line start offsets for O(1) line access and
//! O(log n) lookup of which line contains a given offset.

use crate::types::Position;

/// Tracks line boundaries of a text snapshot.
///
/// Offsets are counted in characters, not bytes. A snapshot always has at
/// least one line (even if empty); a trailing newline produces a final empty
/// line, exactly as `str::split('\n')` would.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
    /// Total number of characters in the snapshot.
    total_len: usize,
}

impl LineIndex {
    /// Creates a line index describing an empty snapshot.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
            total_len: 0,
        }
    }

    /// Builds a line index for the given text.
    pub fn from_text(text: &str) -> Self {
        let mut index = Self::new();
        index.rebuild(text);
        index
    }

    /// Rebuilds the line index from the given text.
    ///
    /// This is O(n) where n is the text length.
    pub fn rebuild(&mut self, text: &str) {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in text.chars() {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
        self.total_len = offset;
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the total number of characters, newlines included.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Returns the character offset where the given 1-based line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|idx| self.line_starts.get(idx))
            .copied()
    }

    /// Returns the character offset of the end of the given 1-based line.
    ///
    /// For all lines except the last, this points to the newline character.
    /// For the last line, this equals the total length.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        let idx = line.checked_sub(1)?;
        if idx >= self.line_count() {
            return None;
        }

        if idx + 1 < self.line_count() {
            Some(self.line_starts[idx + 1] - 1)
        } else {
            Some(self.total_len)
        }
    }

    /// Returns the length of the given line (excluding the newline character).
    pub fn line_len(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        Some(end - start)
    }

    /// Converts a position into a character offset.
    ///
    /// Lines past the end clamp to the end of the text, line 0 clamps to the
    /// first line, and columns past the end of a line clamp to the line end.
    pub fn offset_of(&self, position: Position) -> usize {
        if position.line > self.line_count() {
            return self.total_len;
        }
        let line = position.line.max(1);
        match (self.line_start(line), self.line_end(line)) {
            (Some(start), Some(end)) => (start + position.col).min(end),
            _ => self.total_len,
        }
    }

    /// Converts a character offset into a position.
    ///
    /// Uses binary search for O(log n) lookup. Offsets past the end clamp to
    /// the end of the text.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.total_len);
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        Position::new(idx + 1, offset - self.line_starts[idx])
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
