/*
 * json.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Loading textlint-style JSON trees.
//!
//! Trees produced by markdown-to-ast and similar parsers carry `type`,
//! `range`, `raw`, optional `value`/`alt`/`title` and optional `children`.
//! Other members (`loc`, `url`, `depth`, ...) are ignored, and `null`
//! text fields are treated as absent.

use crate::error::Result;
use crate::node::Node;

impl Node {
    /// Parse a tree from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Node> {
        Ok(serde_json::from_str(input)?)
    }

    /// Convert an already-parsed JSON value into a tree.
    pub fn from_json_value(value: serde_json::Value) -> Result<Node> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
