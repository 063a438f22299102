/*
 * error.rs
 * Copyright (c) 2026 Posit, PBC
 */

use crate::node::NodeKind;
use thiserror::Error;

/// Failure while loading a document tree.
#[derive(Debug, Error)]
pub enum AstError {
    /// The input was not a well-formed textlint tree.
    #[error("Invalid document tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Precondition violation raised by a [`crate::ValueCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The mask symbol must be exactly one character.
    #[error("Mask symbol should be a single character, got {symbol:?}")]
    InvalidMaskSymbol { symbol: String },

    /// Masking requires a `value` field to mask.
    #[error("Cannot mask {kind} node: it does not have a value")]
    MissingValue { kind: NodeKind },
}

/// Result type for tree loading.
pub type Result<T> = std::result::Result<T, AstError>;
