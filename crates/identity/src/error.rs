//! Error types for Signet identity storage.

use std::path::PathBuf;

use signet_crypto::KeyCodecError;
use thiserror::Error;

/// Errors that can occur while loading or creating the persisted identity.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// The key directory could not be created
    #[error("Failed to create key directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key record exists but could not be inspected or read
    #[error("Failed to read key file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The new key record could not be written
    #[error("Failed to write key file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The new key record could not be moved into place
    #[error("Failed to persist key file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Something other than a regular file sits at the key path
    #[error("Key path {path} exists but is not a regular file")]
    NotAFile { path: PathBuf },

    /// The key record does not decode as a P-256 identity
    #[error("Key file {path} is not a valid key record: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: KeyCodecError,
    },

    /// A freshly generated key could not be encoded
    #[error("Failed to encode new key: {0}")]
    Encode(#[source] KeyCodecError),

    /// The secure random source failed during key generation
    #[error("Entropy source failed: {reason}")]
    Entropy { reason: String },
}

/// Result type for key store operations.
pub type KeyStoreResult<T> = Result<T, KeyStoreError>;
