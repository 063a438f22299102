//! Flattening a document tree into plain text
//!
//! Traversal is depth-first and left to right. A node with a payload is a
//! leaf; anything else contributes the text of its children. Each payload is
//! emitted in one of two modes:
//!
//! - **direct**: a `Str` directly inside a `Paragraph` is plain running text,
//!   so its own range is both the original and the intermediate range.
//! - **padded**: every other payload is located inside the raw markup of a
//!   container (the node itself when it sits directly in a paragraph, e.g.
//!   inline code or an image; otherwise its parent, e.g. the `Strong`
//!   wrapping a `Str`). The markup around the payload is the padding.

use crate::error::{Error, Result};
use crate::options::Replacer;
use crate::segment::SegmentTable;
use std::convert::Infallible;
use textmap_ast::{Node, NodeKind, SourceRange};

/// Plain text and its segment table.
///
/// Threaded through the traversal by value: every step takes the
/// accumulator and returns it extended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    pub text: String,
    pub segments: SegmentTable,
}

impl Flattened {
    fn emit(mut self, extraction: Extraction) -> Self {
        tracing::trace!(
            mode = ?extraction.mode,
            original = ?extraction.original,
            intermediate = ?extraction.intermediate,
            generated_start = self.text.len(),
            "Emitting segment"
        );
        self.text.push_str(&extraction.text);
        self.segments
            .push(extraction.original, extraction.intermediate, extraction.text);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Direct,
    Padded,
}

#[derive(Debug)]
struct Extraction {
    mode: Mode,
    original: SourceRange,
    intermediate: SourceRange,
    text: String,
}

enum Visit {
    /// The node yields a segment.
    Emit(Extraction),
    /// The node has a payload but yields nothing; its children are skipped.
    Leaf,
    /// The node has no payload; visit its children.
    Descend,
}

/// Flatten `root` into plain text.
pub fn flatten(root: &Node) -> Flattened {
    let unchanged = |_: &Node, _: &Node| Ok::<Option<Node>, Infallible>(None);
    match visit(root, None, Flattened::default(), &unchanged) {
        Ok(flattened) => flattened,
        Err(never) => match never {},
    }
}

/// Flatten `root`, letting `replacer` rewrite node values first.
///
/// # Errors
///
/// Returns [`Error::Command`] when a chosen command cannot be applied, such
/// as masking a node without a value.
pub fn flatten_with(root: &Node, replacer: &dyn Replacer) -> Result<Flattened> {
    let rewrite = |node: &Node, parent: &Node| match replacer.replace(node, parent) {
        Some(command) => command.apply(node).map(Some).map_err(Error::from),
        None => Ok(None),
    };
    visit(root, None, Flattened::default(), &rewrite)
}

fn visit<E, F>(
    node: &Node,
    parent: Option<&Node>,
    acc: Flattened,
    rewrite: &F,
) -> std::result::Result<Flattened, E>
where
    F: Fn(&Node, &Node) -> std::result::Result<Option<Node>, E>,
{
    // The root only contributes through its children.
    if let Some(parent) = parent {
        let replaced = rewrite(node, parent)?;
        match extract(node, parent, replaced.as_ref()) {
            Visit::Emit(extraction) => return Ok(acc.emit(extraction)),
            Visit::Leaf => return Ok(acc),
            Visit::Descend => {}
        }
    }

    node.children
        .iter()
        .try_fold(acc, |acc, child| visit(child, Some(node), acc, rewrite))
}

fn extract(node: &Node, parent: &Node, replaced: Option<&Node>) -> Visit {
    let Some((field, text)) = replaced.unwrap_or(node).payload() else {
        return Visit::Descend;
    };

    // A rewritten value is still searched for by its source text.
    let needle = match node.payload() {
        Some((source_field, source_text)) if source_field == field => source_text,
        _ => text,
    };

    match (parent.kind, node.kind) {
        (NodeKind::Paragraph, NodeKind::Str) => Visit::Emit(Extraction {
            mode: Mode::Direct,
            original: node.range,
            intermediate: node.range,
            text: text.to_owned(),
        }),
        (NodeKind::Paragraph, _) => padded(node, needle, text),
        _ => padded(parent, needle, text),
    }
}

fn padded(container: &Node, needle: &str, text: &str) -> Visit {
    let raw = container.raw.as_str();
    let original = container.range;

    if raw.len() != original.len() {
        tracing::warn!(
            kind = %container.kind,
            raw_len = raw.len(),
            range = ?original,
            "Raw markup length does not match its range"
        );
    }

    let Some(left_pad) = find_payload(raw, needle) else {
        tracing::warn!(
            kind = %container.kind,
            payload = needle,
            "Payload not found in container markup, skipping"
        );
        return Visit::Leaf;
    };
    let right_pad = raw.len() - (left_pad + needle.len());

    let start = original.start + left_pad;
    let Some(end) = original.end.checked_sub(right_pad).filter(|end| *end >= start) else {
        tracing::warn!(
            kind = %container.kind,
            range = ?original,
            "Payload falls outside its container range, skipping"
        );
        return Visit::Leaf;
    };

    Visit::Emit(Extraction {
        mode: Mode::Padded,
        original,
        intermediate: SourceRange::new(start, end),
        text: text.to_owned(),
    })
}

/// Byte index of `needle` in `raw`.
///
/// Scanning starts after the first character so an opening delimiter never
/// matches: the alt text of `![!](url)` is found at 2, not 0. A container
/// whose markup is exactly the payload still matches at 0.
///
/// The first occurrence wins, even inside the opening markup: `b` in
/// `<b>b</b>` is found in the tag name at 1.
fn find_payload(raw: &str, needle: &str) -> Option<usize> {
    let skip = raw.chars().next().map_or(0, char::len_utf8);
    raw[skip..]
        .find(needle)
        .map(|idx| idx + skip)
        .or_else(|| raw.starts_with(needle).then_some(0))
}
