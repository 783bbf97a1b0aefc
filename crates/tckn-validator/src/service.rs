//! # Validation Service
//!
//! Orchestrates the checksum stage and the civil-registry stage.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::{
    CitizenQuery, IdentityNumber, RejectReason, ValidationOutcome, ValidationRequest,
    VerificationError,
};
use crate::ports::{IdentityVerificationApi, VerificationAuthority};

/// Two-stage validator.
///
/// Local rejections never reach the authority. A request that passes the
/// local checks causes exactly one authority call.
pub struct ValidationService {
    authority: Arc<dyn VerificationAuthority>,
}

impl ValidationService {
    /// Create a service backed by `authority`.
    pub fn new(authority: Arc<dyn VerificationAuthority>) -> Self {
        Self { authority }
    }

    /// Name of the configured authority.
    pub fn authority_name(&self) -> &str {
        self.authority.name()
    }
}

#[async_trait]
impl IdentityVerificationApi for ValidationService {
    async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationOutcome, VerificationError> {
        let identity = match IdentityNumber::parse(&request.tckn) {
            Ok(identity) => identity,
            Err(e) => {
                debug!(reason = %e, "identity number rejected locally");
                return Ok(ValidationOutcome::Rejected(e.into()));
            }
        };

        if request.has_missing_fields() {
            debug!(tckn = %identity.masked(), "required fields missing");
            return Ok(ValidationOutcome::Rejected(RejectReason::MissingField));
        }

        let normalized = request.normalized();
        let query = CitizenQuery {
            identity,
            ad: normalized.ad,
            soyad: normalized.soyad,
            dogum_yili: normalized.dogum_yili,
        };

        match self.authority.verify(&query).await {
            Ok(true) => {
                info!(tckn = %identity.masked(), authority = self.authority.name(), "identity confirmed");
                Ok(ValidationOutcome::Valid)
            }
            Ok(false) => {
                info!(tckn = %identity.masked(), authority = self.authority.name(), "identity not confirmed");
                Ok(ValidationOutcome::NotConfirmed)
            }
            Err(e) => {
                warn!(
                    tckn = %identity.masked(),
                    authority = self.authority.name(),
                    kind = e.kind(),
                    error = %e,
                    "verification failed"
                );
                Err(e)
            }
        }
    }
}
