//! Middleware layers for the HTTP router.

pub mod cors;
pub mod tracing;

pub use cors::create_cors_layer;
pub use self::tracing::{TracingLayer, REQUEST_ID_HEADER};
