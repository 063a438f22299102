//! Error types for source mapping

use textmap_ast::CommandError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A position argument was not a `{line, column}` object with integer
    /// members. This is a caller error; out-of-range positions are not.
    #[error("Malformed position: {reason}")]
    MalformedPosition { reason: String },

    /// A value command rejected the node it was applied to.
    #[error(transparent)]
    Command(#[from] CommandError),
}

pub type Result<T> = std::result::Result<T, Error>;
