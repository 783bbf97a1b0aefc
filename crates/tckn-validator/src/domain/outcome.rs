//! # Validation Outcome
//!
//! Verdicts produced by the pipeline and the JSON shape returned to callers.

use serde::{Deserialize, Serialize};

use super::errors::VerificationError;
use super::identity::StructuralError;

/// Definite local rejection, decided before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Identity number is not 11 characters.
    MalformedLength,
    /// Identity number has a bad digit, leading zero or check digit.
    FailedChecksum,
    /// Name, surname or birth year absent.
    MissingField,
}

impl RejectReason {
    /// Caller-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MalformedLength => "TCKN must be 11 digits",
            Self::FailedChecksum => "Invalid TCKN format",
            Self::MissingField => "Ad, Soyad and DogumYili are required",
        }
    }
}

impl From<StructuralError> for RejectReason {
    fn from(e: StructuralError) -> Self {
        match e {
            StructuralError::Length(_) => Self::MalformedLength,
            _ => Self::FailedChecksum,
        }
    }
}

/// Result of one validation call.
///
/// Transport and format failures are not outcomes; they travel as
/// [`VerificationError`] so callers can tell "confirmed invalid" from
/// "could not confirm".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Authority confirmed the identity.
    Valid,
    /// Rejected locally.
    Rejected(RejectReason),
    /// Authority answered with a negative verdict.
    NotConfirmed,
}

impl ValidationOutcome {
    /// Boolean verdict.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Wire response: `{"valid": bool, "error": "..."}`, `error` omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Final verdict.
    pub valid: bool,
    /// Reason for a negative verdict, if one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResponse {
    /// Collapse a pipeline result into the wire shape.
    pub fn from_result(result: &Result<ValidationOutcome, VerificationError>) -> Self {
        match result {
            Ok(outcome) => Self::from(*outcome),
            Err(e) => Self {
                valid: false,
                error: Some(format!("Error validating TCKN: {}", e)),
            },
        }
    }
}

impl From<ValidationOutcome> for ValidationResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid => Self {
                valid: true,
                error: None,
            },
            ValidationOutcome::Rejected(reason) => Self {
                valid: false,
                error: Some(reason.message().to_string()),
            },
            ValidationOutcome::NotConfirmed => Self {
                valid: false,
                error: None,
            },
        }
    }
}
