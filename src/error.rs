use thiserror::Error;

/// Errors raised by page operations that take caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("image index {index} out of range for gallery of {len}")]
    ImageOutOfRange { index: usize, len: usize },

    #[error("page has been torn down")]
    TornDown,

    #[error("no cat names available")]
    NoCatNames,

    #[error("invalid content: {0}")]
    InvalidContent(String),
}
