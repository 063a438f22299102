//! Line-break index for offset/position conversion

use crate::types::Position;

/// Index of line breaks in a text
///
/// Stores the byte offset of every `\n` so that offsets can be converted to
/// `{line, column}` positions (and back) by binary search instead of a scan
/// from the start of the text. The text itself is not stored; callers pass
/// the same content the index was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct LineIndex {
    /// Byte offsets of each newline character
    line_breaks: Vec<usize>,

    /// Total length of the text in bytes
    total_length: usize,
}

impl LineIndex {
    /// Build the index by scanning `content` once.
    pub fn new(content: &str) -> Self {
        let line_breaks: Vec<usize> = content
            .char_indices()
            .filter_map(|(idx, ch)| if ch == '\n' { Some(idx) } else { None })
            .collect();

        LineIndex {
            line_breaks,
            total_length: content.len(),
        }
    }

    /// Convert a byte offset into a position.
    ///
    /// The line is 1-based; the column counts characters from the start of
    /// the line. An offset equal to the text length is valid (end of text).
    /// Returns None if the offset is out of bounds or not on a character
    /// boundary.
    pub fn offset_to_position(&self, content: &str, offset: usize) -> Option<Position> {
        if offset > self.total_length {
            return None;
        }

        // A newline belongs to the line it terminates, so an exact hit on a
        // line break and a miss both give the index of the line.
        let row = match self.line_breaks.binary_search(&offset) {
            Ok(idx) | Err(idx) => idx,
        };

        let line_start = self.line_start(row)?;
        let column = content.get(line_start..offset)?.chars().count();

        Some(Position {
            line: row + 1,
            column,
        })
    }

    /// Convert a position into a byte offset.
    ///
    /// The column may point one past the last character of the line (at its
    /// terminator, or at the end of the text). Returns None for line 0, a
    /// line past the end, or a column past the end of the line.
    pub fn position_to_offset(&self, content: &str, position: Position) -> Option<usize> {
        let row = position.line.checked_sub(1)?;
        let line_start = self.line_start(row)?;
        let line_end = self
            .line_breaks
            .get(row)
            .copied()
            .unwrap_or(self.total_length);

        let line = content.get(line_start..line_end)?;
        line.char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(line.len()))
            .nth(position.column)
            .map(|idx| line_start + idx)
    }

    /// Byte offset where line `row` (0-indexed) starts
    fn line_start(&self, row: usize) -> Option<usize> {
        match row {
            0 => Some(0),
            _ => self.line_breaks.get(row - 1).map(|lb| lb + 1),
        }
    }

    /// Get the total length of the text in bytes
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Get the number of lines in the text
    pub fn line_count(&self) -> usize {
        self.line_breaks.len() + 1
    }
}
