//! Persisted signing identity for Signet.
//!
//! Exactly one key pair exists per installation. It is created on first use,
//! reused on every later run, and never rotated or overwritten. A record that
//! fails to decode is reported, never replaced: regenerating it would swap the
//! operator's identity without consent.
//!
//! # Storage
//!
//! - Directory created with mode 0700, record file with mode 0600 (unix)
//! - New records are written to a temporary file and linked into place
//!   without clobbering, so concurrent first runs agree on one identity

pub mod error;
pub mod key_store;

pub use error::{KeyStoreError, KeyStoreResult};
pub use key_store::KeyStore;
