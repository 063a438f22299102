//! Construction options for [`crate::StringSource`]

use std::fmt;
use textmap_ast::{Node, ValueCommand};

/// Chooses a value command for a node during flattening.
///
/// Called once per visited non-root node with the node and its parent.
/// Returning `None` leaves the node untouched.
pub trait Replacer {
    fn replace(&self, node: &Node, parent: &Node) -> Option<ValueCommand>;
}

impl<F> Replacer for F
where
    F: Fn(&Node, &Node) -> Option<ValueCommand>,
{
    fn replace(&self, node: &Node, parent: &Node) -> Option<ValueCommand> {
        self(node, parent)
    }
}

/// Options consumed when building a [`crate::StringSource`].
#[derive(Default)]
pub struct StringSourceOptions {
    /// Full authored source text, used for original line/column positions.
    ///
    /// Only needed when the root is not a whole document (its range does
    /// not start at offset 0); otherwise the root's raw text is used.
    pub source_text: Option<String>,

    /// Hook choosing a value command per node.
    pub replacer: Option<Box<dyn Replacer>>,
}

impl StringSourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_text(mut self, source_text: impl Into<String>) -> Self {
        self.source_text = Some(source_text.into());
        self
    }

    pub fn with_replacer(mut self, replacer: impl Replacer + 'static) -> Self {
        self.replacer = Some(Box::new(replacer));
        self
    }
}

impl fmt::Debug for StringSourceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringSourceOptions")
            .field("source_text", &self.source_text.as_ref().map(String::len))
            .field("replacer", &self.replacer.is_some())
            .finish()
    }
}
