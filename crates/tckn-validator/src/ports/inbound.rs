//! # Inbound Ports
//!
//! What the validator offers to the request-handling layer.

use async_trait::async_trait;

use crate::domain::{ValidationOutcome, ValidationRequest, VerificationError};

/// Identity verification API - inbound port.
#[async_trait]
pub trait IdentityVerificationApi: Send + Sync {
    /// Run the checksum stage and, if it passes, the remote stage.
    ///
    /// `Err` means the verdict is undetermined (transport or format failure),
    /// never a negative verdict.
    async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationOutcome, VerificationError>;
}
