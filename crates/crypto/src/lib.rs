//! Cryptographic primitives for the Signet signing identity.
//!
//! This crate provides the key-lifecycle and signing core: the key pair, the
//! persisted key record codec, the signature codec, the signing ceremony and
//! the output artifact it produces.
//!
//! # Algorithms
//!
//! Exactly one pairing is supported:
//! - **Signatures**: ECDSA over NIST P-256, hedged RFC 6979 nonces
//! - **Hashing**: SHA-256
//!
//! # Encodings
//!
//! - Key record: SEC1 `EC PRIVATE KEY` PEM block followed by an SPKI
//!   `PUBLIC KEY` PEM block
//! - Signature: DER `SEQUENCE { r INTEGER, s INTEGER }`, padded base64
//! - Artifact: indented JSON `{message, signature, pubkey}`
//!
//! # Security Principles
//!
//! - Never roll custom cryptographic primitives
//! - Secrets must never be logged
//! - Secret scalars and the record text holding them are zeroized on drop

pub mod artifact;
pub mod key_codec;
pub mod keys;
pub mod signature_codec;
pub mod signing;

#[cfg(test)]
mod test_vectors;

pub use artifact::{ArtifactError, OutputArtifact};
pub use key_codec::{DecodedKeyRecord, KeyCodecError, KeyCodecResult, PersistedKeyRecord};
pub use keys::KeyPair;
pub use signature_codec::{SignatureCodecError, SignatureCodecResult};
pub use signing::{
    digest, verify_artifact, verify_digest, MessageDigest, Signer, SigningError, SigningMetrics,
    SigningResult, VerificationError,
};

pub use p256::ecdsa::{Signature, VerifyingKey};
