//! Plain text with position translation back to the authored source

use crate::error::{Error, Result};
use crate::flatten::{Flattened, flatten, flatten_with};
use crate::line_index::LineIndex;
use crate::options::StringSourceOptions;
use crate::segment::{Segment, SegmentTable};
use crate::types::{Bias, Position};
use serde_json::{Map, Value};
use std::fmt;
use textmap_ast::Node;

/// The plain-text rendering of a document tree.
///
/// Built once from a tree; afterwards every query is a read-only lookup.
/// Offsets are byte offsets. Positions have a 1-based line and a 0-based
/// column counted in characters, in both the generated and the original
/// text.
#[derive(Debug, Clone)]
pub struct StringSource {
    text: String,
    segments: SegmentTable,
    generated_index: LineIndex,
    original: Option<OriginalText>,
}

/// The full authored source, needed for original line/column positions.
#[derive(Debug, Clone)]
struct OriginalText {
    text: String,
    index: LineIndex,
}

impl StringSource {
    /// Flatten `root`.
    ///
    /// Original line/column positions are available when `root` starts at
    /// offset 0 (a whole document); its raw text is then the source. For a
    /// sub-tree, pass the source through [`StringSource::with_options`].
    pub fn new(root: &Node) -> Self {
        Self::from_flattened(root, flatten(root), None)
    }

    /// Flatten `root` with construction options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`] if the replacer chose a value command that
    /// cannot be applied to its node.
    pub fn with_options(root: &Node, options: StringSourceOptions) -> Result<Self> {
        let StringSourceOptions {
            source_text,
            replacer,
        } = options;
        let flattened = match replacer {
            Some(replacer) => flatten_with(root, replacer.as_ref())?,
            None => flatten(root),
        };
        Ok(Self::from_flattened(root, flattened, source_text))
    }

    fn from_flattened(root: &Node, flattened: Flattened, source_text: Option<String>) -> Self {
        let Flattened { text, segments } = flattened;

        let source_text = source_text.or_else(|| (root.range.start == 0).then(|| root.raw.clone()));
        if source_text.is_none() {
            tracing::debug!(
                root = %root.kind,
                range = ?root.range,
                "No full source text, original positions are unavailable"
            );
        }
        let original = source_text.map(|text| OriginalText {
            index: LineIndex::new(&text),
            text,
        });

        tracing::debug!(
            segments = segments.len(),
            output_len = text.len(),
            "Built string source"
        );

        StringSource {
            generated_index: LineIndex::new(&text),
            text,
            segments,
            original,
        }
    }

    /// The generated plain text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The segments, in generated order.
    pub fn segments(&self) -> &[Segment] {
        self.segments.segments()
    }

    pub fn segment_table(&self) -> &SegmentTable {
        &self.segments
    }

    /// Map a generated offset to an offset in the original source.
    ///
    /// Returns None when the offset is past the generated text.
    pub fn original_offset_for_generated_offset(&self, offset: usize) -> Option<usize> {
        self.original_offset_for_generated_offset_with_bias(offset, Bias::Start)
    }

    /// Like [`Self::original_offset_for_generated_offset`], with an explicit
    /// tie-break for offsets on a segment boundary.
    ///
    /// With [`Bias::End`], the end of a match at `**match** text` offset 5
    /// resolves to 7, the end of `match` inside its delimiters, rather than
    /// to the start of ` text`.
    pub fn original_offset_for_generated_offset_with_bias(
        &self,
        offset: usize,
        bias: Bias,
    ) -> Option<usize> {
        self.segments.original_offset_for_generated_offset(offset, bias)
    }

    /// Map a generated offset to a line/column position in the original source.
    pub fn original_position_for_generated_offset(&self, offset: usize) -> Option<Position> {
        self.original_position_for_generated_offset_with_bias(offset, Bias::Start)
    }

    pub fn original_position_for_generated_offset_with_bias(
        &self,
        offset: usize,
        bias: Bias,
    ) -> Option<Position> {
        let original = self.original_offset_for_generated_offset_with_bias(offset, bias)?;
        self.original_position_for_original_offset(original)
    }

    /// Map a line/column position in the generated text to an original offset.
    pub fn original_offset_for_generated_position(&self, position: Position) -> Option<usize> {
        self.original_offset_for_generated_position_with_bias(position, Bias::Start)
    }

    pub fn original_offset_for_generated_position_with_bias(
        &self,
        position: Position,
        bias: Bias,
    ) -> Option<usize> {
        let generated = self.generated_offset_for_generated_position(position)?;
        self.original_offset_for_generated_offset_with_bias(generated, bias)
    }

    /// Map a line/column position in the generated text to one in the
    /// original source.
    pub fn original_position_for_generated_position(&self, position: Position) -> Option<Position> {
        self.original_position_for_generated_position_with_bias(position, Bias::Start)
    }

    pub fn original_position_for_generated_position_with_bias(
        &self,
        position: Position,
        bias: Bias,
    ) -> Option<Position> {
        let original = self.original_offset_for_generated_position_with_bias(position, bias)?;
        self.original_position_for_original_offset(original)
    }

    /// Map an untyped `{"line": .., "column": ..}` position, as received
    /// from a JSON caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPosition`] if `value` is not an object with
    /// integer `line` and `column` members. Negative or out-of-range
    /// integers are not errors; they resolve to `Ok(None)`.
    pub fn original_position_for_generated_value(&self, value: &Value) -> Result<Option<Position>> {
        Ok(position_from_value(value)?
            .and_then(|position| self.original_position_for_generated_position(position)))
    }

    /// Line/column position of a generated offset within the generated text.
    pub fn generated_position_for_generated_offset(&self, offset: usize) -> Option<Position> {
        self.generated_index.offset_to_position(&self.text, offset)
    }

    /// Generated offset of a line/column position within the generated text.
    pub fn generated_offset_for_generated_position(&self, position: Position) -> Option<usize> {
        self.generated_index.position_to_offset(&self.text, position)
    }

    fn original_position_for_original_offset(&self, offset: usize) -> Option<Position> {
        let original = self.original.as_ref()?;
        original.index.offset_to_position(&original.text, offset)
    }
}

impl fmt::Display for StringSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for StringSource {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Read a `{line, column}` object; `Ok(None)` for negative coordinates.
fn position_from_value(value: &Value) -> Result<Option<Position>> {
    let Value::Object(members) = value else {
        return Err(malformed(format!(
            "expected an object with `line` and `column`, found {}",
            describe(value)
        )));
    };
    let line = coordinate(members, "line")?;
    let column = coordinate(members, "column")?;
    Ok(line
        .zip(column)
        .map(|(line, column)| Position { line, column }))
}

fn coordinate(members: &Map<String, Value>, name: &str) -> Result<Option<usize>> {
    match members.get(name) {
        Some(Value::Number(number)) => {
            if let Some(n) = number.as_u64() {
                Ok(usize::try_from(n).ok())
            } else if number.is_i64() {
                Ok(None)
            } else {
                Err(malformed(format!("`{name}` must be an integer, found {number}")))
            }
        }
        Some(other) => Err(malformed(format!(
            "`{name}` must be an integer, found {}",
            describe(other)
        ))),
        None => Err(malformed(format!("missing `{name}`"))),
    }
}

fn malformed(reason: String) -> Error {
    Error::MalformedPosition { reason }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
