//! Quiz parsing errors

use thiserror::Error;

/// Failure to turn a block payload into a [QuizBlock](super::QuizBlock).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The payload has no `- [ ]` / `- [x]` option lines.
    #[error("quiz block has no checkbox options")]
    NoOptionsFound,
}

/// Malformed metadata. Recovered inside the parser by falling back to empty metadata.
#[derive(Debug, Error)]
pub(crate) enum MetadataParseError {
    #[error("metadata object is never closed")]
    Unterminated,
    #[error("metadata is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
