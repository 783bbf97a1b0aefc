//! # TCKN Validator
//!
//! Two-stage validation of Turkish citizen identity numbers (T.C. Kimlik No).
//!
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Pipeline
//!
//! ```text
//! ValidationRequest
//!        │
//!        ▼
//! ┌──────────────────────┐   reject (length / checksum / missing field)
//! │  Checksum Validator  │──────────────────────────────────────────────► Rejected
//! │  (pure, no I/O)      │
//! └──────────┬───────────┘
//!            │ passes
//!            ▼
//! ┌──────────────────────┐   SOAP 1.1 POST   ┌───────────────────────┐
//! │   Remote Verifier    │──────────────────►│  NVI KPSPublic.asmx   │
//! │ (VerificationAuthority)◄──────────────────│  TCKimlikNoDogrula    │
//! └──────────┬───────────┘   XML reply       └───────────────────────┘
//!            ▼
//!   Valid / NotConfirmed / VerificationError
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! tckn-validator/
//! ├── domain/     # IdentityNumber checksum, request/outcome types, errors
//! ├── ports/      # Inbound API + outbound authority trait (and a mock)
//! ├── adapters/   # SOAP envelope codec and the NVI reqwest client
//! └── service.rs  # ValidationService orchestrating both stages
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tckn_validator::{
//!     IdentityVerificationApi, NviSoapClient, ValidationRequest, ValidationService, NVI_ENDPOINT,
//! };
//!
//! let authority = Arc::new(NviSoapClient::new(NVI_ENDPOINT)?);
//! let service = ValidationService::new(authority);
//! let outcome = service.validate(&request).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{contains_true_verdict, NviSoapClient, SoapEnvelope, NVI_ENDPOINT};
pub use domain::{
    is_valid_tckn, CitizenQuery, IdentityNumber, RejectReason, StructuralError,
    ValidationOutcome, ValidationRequest, ValidationResponse, VerificationError,
    TCKN_LENGTH,
};
pub use ports::{IdentityVerificationApi, MockAuthority, VerificationAuthority};
pub use service::ValidationService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
