//! # TCKN Test Suite
//!
//! Cross-crate tests for the validator and the gateway.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Checksum throughput (criterion)
//! └── src/
//!     ├── support.rs    # Canned civil-registry server, identity number generator
//!     └── integration/  # Pipeline and gateway end-to-end flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tckn-tests
//! cargo test -p tckn-tests integration::gateway_e2e
//! cargo bench -p tckn-tests
//! ```

pub mod integration;
pub mod support;
