/*
 * command.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Value commands that rewrite a single node's text before flattening.

use crate::error::CommandError;
use crate::node::Node;

/// A rewrite of a node's `value`.
///
/// Commands act on one node and return a rewritten copy; they never walk
/// the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCommand {
    /// Replace every character of `value` with `symbol`.
    Mask { symbol: char },
    /// Clear `value` to the empty string.
    Empty,
}

impl ValueCommand {
    /// Create a mask command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidMaskSymbol`] unless `symbol` is exactly
    /// one character.
    pub fn mask(symbol: &str) -> Result<Self, CommandError> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(ValueCommand::Mask { symbol }),
            _ => Err(CommandError::InvalidMaskSymbol {
                symbol: symbol.to_owned(),
            }),
        }
    }

    pub fn empty() -> Self {
        ValueCommand::Empty
    }

    /// Apply the command to `node`, returning the rewritten copy.
    ///
    /// # Errors
    ///
    /// Masking a node without a `value` fails with
    /// [`CommandError::MissingValue`]. `Empty` on such a node is a no-op.
    pub fn apply(&self, node: &Node) -> Result<Node, CommandError> {
        match self {
            ValueCommand::Mask { symbol } => {
                let value = node
                    .value
                    .as_deref()
                    .ok_or(CommandError::MissingValue { kind: node.kind })?;
                let masked: String = value.chars().map(|_| *symbol).collect();
                Ok(Node {
                    value: Some(masked),
                    ..node.clone()
                })
            }
            ValueCommand::Empty => {
                if node.value.is_none() {
                    return Ok(node.clone());
                }
                Ok(Node {
                    value: Some(String::new()),
                    ..node.clone()
                })
            }
        }
    }
}
