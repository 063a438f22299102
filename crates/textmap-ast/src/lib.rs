//! Document trees for plain-text projection
//!
//! This crate defines the read-only input consumed by the `textmap` crate:
//! a tree of [`Node`]s, each tagged with a [`NodeKind`], carrying optional
//! text fields and the [`SourceRange`] and raw markup it was parsed from.
//!
//! Trees normally come from an external markup parser, either built in code
//! or loaded from textlint-style JSON with [`Node::from_json_str`].
//! [`ValueCommand`]s rewrite a single node's text (masking or clearing it)
//! before the tree is flattened.

pub mod command;
pub mod error;
pub mod json;
pub mod node;

pub use command::ValueCommand;
pub use error::{AstError, CommandError, Result};
pub use node::{Node, NodeKind, PayloadField, SourceRange};
