//! # Domain Errors
//!
//! Failures that leave a verification undetermined.

use thiserror::Error;

/// The authority could not be asked, or its answer could not be read.
///
/// Never a verdict: callers must not treat any of these as `valid: false`.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// Identity number could not be turned into its integer wire form.
    #[error("identity number is not numeric: {0}")]
    Format(String),

    /// Outbound request could not be built.
    #[error("failed to build request: {0}")]
    Request(String),

    /// Connection, DNS, TLS or timeout failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Reply body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<std::num::ParseIntError> for VerificationError {
    fn from(e: std::num::ParseIntError) -> Self {
        VerificationError::Format(e.to_string())
    }
}

impl VerificationError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Format(_) => "format",
            Self::Request(_) => "request",
            Self::Transport(_) => "transport",
            Self::Body(_) => "body",
        }
    }
}
