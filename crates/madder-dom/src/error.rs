//! Error types for document parsing.

use thiserror::Error;

/// Error type for parsing markup text into a [`Document`](crate::Document).
///
/// Every variant is a hard parse failure. Documents that parse but do not
/// have the shape a caller expects are not errors at this layer; callers
/// inspect the resulting tree themselves.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader rejected the input.
    #[error("malformed XML: {0}")]
    Syntax(String),

    /// A closing tag appeared with no matching open element.
    #[error("unexpected closing tag `</{0}>`")]
    UnexpectedClose(String),

    /// The input ended while an element was still open.
    #[error("unclosed element `<{0}>`")]
    Unclosed(String),

    /// The input contained no root element.
    #[error("document has no root element")]
    NoRoot,

    /// A second element appeared at the top level.
    #[error("document has multiple root elements")]
    MultipleRoots,
}
