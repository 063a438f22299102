/*
 * common/mod.rs
 *
 * Tree builders for integration tests. Each node takes its raw markup from
 * the source text by range, the way a markup parser would report it.
 *
 * Copyright (c) 2026 Posit, PBC
 */

#![allow(dead_code)]

use std::ops::Range;
use textmap::{Node, NodeKind};

pub struct Tree<'s> {
    pub source: &'s str,
}

impl<'s> Tree<'s> {
    pub fn new(source: &'s str) -> Self {
        Tree { source }
    }

    pub fn document(&self, children: Vec<Node>) -> Node {
        self.wrap(NodeKind::Document, 0..self.source.len(), children)
    }

    pub fn paragraph(&self, range: Range<usize>, children: Vec<Node>) -> Node {
        self.wrap(NodeKind::Paragraph, range, children)
    }

    pub fn wrap(&self, kind: NodeKind, range: Range<usize>, children: Vec<Node>) -> Node {
        Node::spanning(kind, self.source, range).with_children(children)
    }

    /// A `Str` whose value is exactly its source text.
    pub fn text(&self, range: Range<usize>) -> Node {
        let value = &self.source[range.clone()];
        Node::spanning(NodeKind::Str, self.source, range).with_value(value)
    }

    pub fn code(&self, range: Range<usize>, value: &str) -> Node {
        Node::spanning(NodeKind::Code, self.source, range).with_value(value)
    }

    pub fn image(&self, range: Range<usize>, alt: &str) -> Node {
        Node::spanning(NodeKind::Image, self.source, range).with_alt(alt)
    }
}

/// A document holding one paragraph that spans the whole source.
pub fn single_paragraph(source: &str, build: impl FnOnce(&Tree<'_>) -> Vec<Node>) -> Node {
    let tree = Tree::new(source);
    let children = build(&tree);
    tree.document(vec![tree.paragraph(0..source.len(), children)])
}
