//! Error types for seqstamp

use thiserror::Error;

/// seqstamp errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqstampError {
    /// The OS random source could not produce bytes. Generators cannot be
    /// built safely without it.
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// A string did not follow the canonical `TTTTTTTTTTTT-SSSSSSSS-HHHHHHHHHHHH` form.
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),
}

impl SeqstampError {
    #[inline]
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        SeqstampError::InvalidFormat(msg.into())
    }

    /// True for parse failures, false for startup failures
    pub fn is_format(&self) -> bool {
        matches!(self, SeqstampError::InvalidFormat(_))
    }
}

/// Result type for seqstamp operations
pub type SeqstampResult<T> = Result<T, SeqstampError>;
