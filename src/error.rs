//! Errors produced while validating a booklet job or computing its page order.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookletError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookletError {
    /// A required parameter was never supplied by the CLI, environment, or config file
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("invalid page count {0}: must be a positive multiple of 8")]
    InvalidPageCount(i64),

    /// The sequence handed to the inversion step isn't a permutation of `1..=len`
    #[error("page order is not a permutation: value {value} at position {position} {reason}")]
    MalformedPermutation {
        position: usize,
        value: usize,
        reason: &'static str,
    },
}

impl From<derive_builder::UninitializedFieldError> for BookletError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        BookletError::MissingParameter(e.field_name())
    }
}
