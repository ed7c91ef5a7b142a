//! Error types for the tabledown library.

use crate::model::NodeId;
use thiserror::Error;

/// Result type alias for tabledown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a document tree.
///
/// Rendering itself degrades gracefully on malformed content (missing
/// captions, bad colspan values, unknown alignments) and never turns those
/// into errors; the variants here cover host mistakes such as handing the
/// engine a node identifier from a different tree.
#[derive(Error, Debug)]
pub enum Error {
    /// A node identifier does not resolve inside the tree being rendered.
    #[error("node {0} is not part of the rendered tree")]
    InvalidNode(NodeId),

    /// A rule was registered against a node kind it cannot render.
    #[error("rule '{0}' cannot render this node")]
    RuleMismatch(String),

    /// Generic rendering error with message.
    #[error("rendering error: {0}")]
    Render(String),
}
