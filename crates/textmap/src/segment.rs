//! Segments correlating generated text with its source

use crate::types::Bias;
use serde::{Deserialize, Serialize};
use std::fmt;
use textmap_ast::SourceRange;

/// One emitted run of plain text.
///
/// For `**str**` the segment is:
///
/// ```text
/// original:     [0, 7)   **str**
/// intermediate: [2, 5)     str
/// generated:    [0, 3)   str
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Range of the node's full markup in the source, delimiters included
    pub original: SourceRange,
    /// Range of the payload in the source once padding is stripped
    pub intermediate: SourceRange,
    /// Range in the generated text
    pub generated: SourceRange,
    /// The emitted text
    pub text: String,
}

impl Segment {
    /// Whether `offset` falls in this segment's generated range under `bias`.
    pub fn contains_generated(&self, offset: usize, bias: Bias) -> bool {
        match bias {
            Bias::Start => self.generated.start <= offset && offset < self.generated.end,
            Bias::End => self.generated.start < offset && offset <= self.generated.end,
        }
    }

    /// Map a generated offset inside this segment to a source offset.
    ///
    /// The distance into the segment is clamped to the payload width, which
    /// only matters for masked text whose UTF-8 width changed.
    pub fn original_offset(&self, offset: usize) -> usize {
        let delta = offset
            .saturating_sub(self.generated.start)
            .min(self.intermediate.len());
        let padding = self.intermediate.start.saturating_sub(self.original.start);
        self.original.start + padding + delta
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "original [{}, {}) intermediate [{}, {}) generated [{}, {}) {:?}",
            self.original.start,
            self.original.end,
            self.intermediate.start,
            self.intermediate.end,
            self.generated.start,
            self.generated.end,
            self.text
        )
    }
}

/// Ordered, contiguous segments covering the whole generated text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment for `text`, placing it directly after the last one.
    ///
    /// Empty text produces no segment, so every generated range is non-empty.
    pub fn push(&mut self, original: SourceRange, intermediate: SourceRange, text: String) {
        if text.is_empty() {
            return;
        }
        let start = self.generated_len();
        self.segments.push(Segment {
            original,
            intermediate,
            generated: SourceRange::new(start, start + text.len()),
            text,
        });
    }

    /// Length of the generated text covered so far.
    pub fn generated_len(&self) -> usize {
        self.segments.last().map_or(0, |s| s.generated.end)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Find the segment holding generated `offset`.
    pub fn segment_for_generated_offset(&self, offset: usize, bias: Bias) -> Option<&Segment> {
        // Generated ranges are sorted and non-overlapping, so the candidate
        // is the first segment whose end reaches past `offset`.
        let idx = match bias {
            Bias::Start => self.segments.partition_point(|s| s.generated.end <= offset),
            Bias::End => self.segments.partition_point(|s| s.generated.end < offset),
        };
        self.segments
            .get(idx)
            .filter(|segment| segment.contains_generated(offset, bias))
    }

    /// Map a generated offset back to a source offset.
    pub fn original_offset_for_generated_offset(&self, offset: usize, bias: Bias) -> Option<usize> {
        self.segment_for_generated_offset(offset, bias)
            .map(|segment| segment.original_offset(offset))
    }
}

impl<'a> IntoIterator for &'a SegmentTable {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
