//! # Outbound Ports
//!
//! The civil-registry authority the remote stage depends on.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{CitizenQuery, VerificationError};

/// Verification authority - outbound port.
///
/// One call per invocation, no retries, no caching. Implementations share no
/// mutable state between calls beyond what the transport pools internally.
#[async_trait]
pub trait VerificationAuthority: Send + Sync {
    /// Ask the authority whether the identity/name/birth-year combination exists.
    async fn verify(&self, query: &CitizenQuery) -> Result<bool, VerificationError>;

    /// Identifier for logging.
    fn name(&self) -> &str;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock authority with a fixed verdict and a call counter.
#[derive(Debug, Default)]
pub struct MockAuthority {
    /// Verdict returned on success.
    pub verdict: bool,
    /// Return a transport error instead of a verdict.
    pub should_fail: bool,
    calls: AtomicUsize,
    last_query: Mutex<Option<CitizenQuery>>,
}

impl MockAuthority {
    /// Authority that always answers `verdict`.
    pub fn with_verdict(verdict: bool) -> Self {
        Self {
            verdict,
            ..Default::default()
        }
    }

    /// Authority that always fails with a transport error.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Number of `verify` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent query received, if any.
    pub fn last_query(&self) -> Option<CitizenQuery> {
        self.last_query.lock().ok().and_then(|q| q.clone())
    }
}

#[async_trait]
impl VerificationAuthority for MockAuthority {
    async fn verify(&self, query: &CitizenQuery) -> Result<bool, VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.last_query.lock() {
            *slot = Some(query.clone());
        }

        if self.should_fail {
            return Err(VerificationError::Transport("Mock failure".to_string()));
        }
        Ok(self.verdict)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
