//! Plain-text projection of document trees
//!
//! Text-quality tools (linters, spell and grammar checkers) analyse plain
//! text, but must report findings against the marked-up source. This crate
//! flattens a document tree into plain text and keeps, for every emitted
//! run, where it came from.
//!
//! # Overview
//!
//! - [`StringSource`]: the generated text plus every position query
//! - [`Segment`]: one emitted run with its original, intermediate
//!   (padding stripped) and generated ranges
//! - [`LineIndex`]: offset/line-column conversion over a text
//! - [`StringSourceOptions`]: full source text and value-command hook
//!
//! # Example
//!
//! ```rust
//! use textmap::{Bias, Position, StringSource};
//! use textmap_ast::{Node, NodeKind};
//!
//! let text = "**match** text";
//! let strong = Node::spanning(NodeKind::Strong, text, 0..9)
//!     .with_children(vec![Node::spanning(NodeKind::Str, text, 2..7).with_value("match")]);
//! let tail = Node::spanning(NodeKind::Str, text, 9..14).with_value(" text");
//! let root = Node::spanning(NodeKind::Document, text, 0..14).with_children(vec![
//!     Node::spanning(NodeKind::Paragraph, text, 0..14).with_children(vec![strong, tail]),
//! ]);
//!
//! let source = StringSource::new(&root);
//! assert_eq!(source.as_str(), "match text");
//! assert_eq!(source.original_offset_for_generated_offset(0), Some(2));
//! assert_eq!(source.original_offset_for_generated_offset_with_bias(5, Bias::End), Some(7));
//! assert_eq!(
//!     source.original_position_for_generated_position(Position::new(1, 6)),
//!     Some(Position::new(1, 10))
//! );
//! ```

pub mod error;
pub mod flatten;
pub mod line_index;
pub mod options;
pub mod segment;
pub mod string_source;
pub mod types;

pub use error::{Error, Result};
pub use flatten::{Flattened, flatten, flatten_with};
pub use line_index::LineIndex;
pub use options::{Replacer, StringSourceOptions};
pub use segment::{Segment, SegmentTable};
pub use string_source::StringSource;
pub use types::{Bias, Position};
pub use textmap_ast::{Node, NodeKind, SourceRange, ValueCommand};
