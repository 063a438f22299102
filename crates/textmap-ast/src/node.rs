/*
 * node.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Document tree types

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A half-open `[start, end)` range of byte offsets into the authored source.
///
/// Serialized as a two-element array, which is how textlint trees store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct SourceRange {
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(start: usize, end: usize) -> Self {
        SourceRange { start, end }
    }

    /// Width of the range in bytes (0 for an inverted range).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<[usize; 2]> for SourceRange {
    fn from([start, end]: [usize; 2]) -> Self {
        SourceRange { start, end }
    }
}

impl From<SourceRange> for [usize; 2] {
    fn from(range: SourceRange) -> Self {
        [range.start, range.end]
    }
}

impl From<Range<usize>> for SourceRange {
    fn from(range: Range<usize>) -> Self {
        SourceRange {
            start: range.start,
            end: range.end,
        }
    }
}

/// The kind of a document node.
///
/// Textlint type names map onto these variants; anything without a
/// dedicated variant is a generic [`NodeKind::Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum NodeKind {
    Document,
    Paragraph,
    Header,
    /// Minimal run of literal text.
    Str,
    Emphasis,
    Strong,
    Delete,
    /// Inline code span.
    Code,
    Link,
    Image,
    /// Inline HTML: an element wrapping text children, or raw markup.
    Html,
    /// Any other block or inline wrapper (lists, quotes, tables, ...).
    Container,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Header => "Header",
            NodeKind::Str => "Str",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Delete => "Delete",
            NodeKind::Code => "Code",
            NodeKind::Link => "Link",
            NodeKind::Image => "Image",
            NodeKind::Html => "Html",
            NodeKind::Container => "Container",
        }
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        match name {
            "Document" => NodeKind::Document,
            "Paragraph" => NodeKind::Paragraph,
            "Header" => NodeKind::Header,
            "Str" => NodeKind::Str,
            "Emphasis" => NodeKind::Emphasis,
            "Strong" => NodeKind::Strong,
            "Delete" => NodeKind::Delete,
            "Code" => NodeKind::Code,
            "Link" => NodeKind::Link,
            "Image" => NodeKind::Image,
            "Html" => NodeKind::Html,
            _ => NodeKind::Container,
        }
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        NodeKind::from(name.as_str())
    }
}

impl From<NodeKind> for &'static str {
    fn from(kind: NodeKind) -> Self {
        kind.as_str()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which text-bearing field a payload was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadField {
    Value,
    Alt,
    Title,
}

/// An immutable element of the input document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    pub range: SourceRange,
    /// The source text exactly spanning `range`, delimiters included.
    #[serde(default)]
    pub raw: String,
}

impl Node {
    pub fn new(kind: NodeKind, range: impl Into<SourceRange>, raw: impl Into<String>) -> Self {
        Node {
            kind,
            value: None,
            alt: None,
            title: None,
            children: Vec::new(),
            range: range.into(),
            raw: raw.into(),
        }
    }

    /// Build a node whose `raw` is the slice of `source` covered by `range`.
    ///
    /// An out-of-bounds or non-boundary range yields an empty `raw`.
    pub fn spanning(kind: NodeKind, source: &str, range: Range<usize>) -> Self {
        let raw = source.get(range.clone()).unwrap_or_default();
        Node::new(kind, range, raw)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// The textual payload of this node: the first of `value`, `alt`,
    /// `title` that is present and non-empty.
    ///
    /// A `title` on a node with children (a link's tooltip) is not text;
    /// such a node contributes through its children instead.
    pub fn payload(&self) -> Option<(PayloadField, &str)> {
        let title = if self.has_children() {
            None
        } else {
            self.title.as_deref()
        };
        [
            (PayloadField::Value, self.value.as_deref()),
            (PayloadField::Alt, self.alt.as_deref()),
            (PayloadField::Title, title),
        ]
        .into_iter()
        .find_map(|(field, text)| match text {
            Some(text) if !text.is_empty() => Some((field, text)),
            _ => None,
        })
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
