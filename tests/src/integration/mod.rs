//! End-to-end flows against a canned civil-registry server.

pub mod pipeline;
