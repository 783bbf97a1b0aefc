//! # Adapters
//!
//! Outbound adapter for the NVI civil-registry service and its SOAP codec.

pub mod nvi;
pub mod soap;

pub use nvi::{NviSoapClient, NVI_ENDPOINT};
pub use soap::{contains_true_verdict, KimlikNoDogrula, SoapEnvelope, SOAP_ACTION, TRUE_VERDICT_MARKER};
