//! # Domain
//!
//! Pure types: identity number checksum, request/outcome model, errors.

pub mod errors;
pub mod identity;
pub mod outcome;
pub mod request;

pub use errors::VerificationError;
pub use identity::{is_valid_tckn, IdentityNumber, StructuralError, TCKN_LENGTH};
pub use outcome::{RejectReason, ValidationOutcome, ValidationResponse};
pub use request::{CitizenQuery, ValidationRequest};
