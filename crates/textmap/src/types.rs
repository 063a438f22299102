//! Core types for position mapping

use serde::{Deserialize, Serialize};

/// A two-dimensional position in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters not bytes)
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Tie-break rule for an offset shared by the end of one segment and the
/// start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    /// Start-inclusive, end-exclusive: a boundary belongs to the segment
    /// that begins there.
    #[default]
    Start,
    /// Start-exclusive, end-inclusive: a boundary belongs to the segment
    /// that ends there. Used for the closing offset of a match.
    End,
}
