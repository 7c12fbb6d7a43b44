//! Integration tests for the Signet signing workflow
//!
//! This test suite validates:
//! - First use creates one identity and later runs reuse it
//! - Artifacts produced by the workflow verify from their JSON text alone
//! - Records and signatures produced by OpenSSL interoperate
//! - Broken records abort the workflow without being touched

pub mod test_utils;
