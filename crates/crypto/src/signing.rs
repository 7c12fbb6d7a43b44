//! Message Signing Service
//!
//! This module provides the signing ceremony that:
//! - Hashes the message bytes with SHA-256
//! - Signs the digest with ECDSA over P-256 using a fresh nonce per call
//! - Encodes the signature and binds it to the message and public key
//!
//! # Security Model
//!
//! - Nonces are derived per RFC 6979 and hedged with entropy drawn from the
//!   signer's RNG on every call, so two signatures never share a nonce even
//!   for the same message
//! - A failing entropy source aborts the call; no artifact is produced
//! - Private keys never leave the `KeyPair`

use p256::ecdsa::{Signature, VerifyingKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::{Digest as _, Sha256};
use signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use thiserror::Error;

use crate::artifact::OutputArtifact;
use crate::key_codec::{self, KeyCodecError};
use crate::keys::KeyPair;
use crate::signature_codec::{self, SignatureCodecError};

/// SHA-256 digest of a message.
pub type MessageDigest = [u8; 32];

/// Errors that can occur during signing operations.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Entropy source failed: {reason}")]
    Entropy { reason: String },

    #[error("ECDSA signing failed: {reason}")]
    Ecdsa { reason: String },
}

/// Result type for signing operations.
pub type SigningResult<T> = Result<T, SigningError>;

/// Errors that can occur while verifying an artifact.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Invalid public key: {0}")]
    PublicKey(#[from] KeyCodecError),

    #[error("Invalid signature encoding: {0}")]
    SignatureEncoding(#[from] SignatureCodecError),

    #[error("Signature does not match message and public key")]
    InvalidSignature,
}

/// Metrics for observability.
#[derive(Debug, Default)]
pub struct SigningMetrics {
    pub messages_signed_total: u64,
    pub signing_errors_total: u64,
}

/// Computes the SHA-256 digest of the message's raw bytes.
pub fn digest(message: &str) -> MessageDigest {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(message.as_bytes()));
    out
}

/// Signer bound to an entropy source. Defaults to the operating system RNG.
pub struct Signer<R = OsRng> {
    rng: R,
    metrics: SigningMetrics,
}

impl Signer<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for Signer<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Signer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            metrics: SigningMetrics::default(),
        }
    }

    /// Signs `message` and binds the result to `public_key_pem`.
    ///
    /// The public key text is copied into the artifact unchanged. Any length of
    /// message is accepted, including the empty string.
    ///
    /// # Examples
    /// ```
    /// use rand::rngs::OsRng;
    /// use signet_crypto::{key_codec, verify_artifact, KeyPair, Signer};
    ///
    /// let key_pair = KeyPair::generate(&mut OsRng);
    /// let record = key_codec::encode(&key_pair).unwrap();
    ///
    /// let mut signer = Signer::new();
    /// let artifact = signer.sign("Hello", record.public_key_pem(), &key_pair).unwrap();
    ///
    /// assert_eq!(artifact.message(), "Hello");
    /// assert!(verify_artifact(&artifact).is_ok());
    /// ```
    pub fn sign(
        &mut self,
        message: &str,
        public_key_pem: &str,
        key_pair: &KeyPair,
    ) -> SigningResult<OutputArtifact> {
        let digest = digest(message);

        let signature = match self.sign_digest(&digest, key_pair) {
            Ok(signature) => signature,
            Err(e) => {
                self.metrics.signing_errors_total += 1;
                return Err(e);
            }
        };

        let encoded = signature_codec::encode(&signature);
        self.metrics.messages_signed_total += 1;
        tracing::debug!(
            message_len = message.len(),
            signature_len = encoded.len(),
            "Message signed"
        );

        Ok(OutputArtifact::new(message, encoded, public_key_pem))
    }

    /// Signs a precomputed digest with a freshly hedged nonce.
    pub fn sign_digest(
        &mut self,
        digest: &MessageDigest,
        key_pair: &KeyPair,
    ) -> SigningResult<Signature> {
        let mut guard = EntropyGuard::new(&mut self.rng);

        let signature: Signature = key_pair
            .signing_key()
            .sign_prehash_with_rng(&mut guard, digest)
            .map_err(|e| SigningError::Ecdsa {
                reason: e.to_string(),
            })?;

        // The nonce was derived without the requested entropy; discard it.
        if let Some(failure) = guard.failure {
            return Err(SigningError::Entropy {
                reason: failure.to_string(),
            });
        }

        Ok(signature)
    }

    /// Gets a snapshot of current metrics.
    pub fn metrics(&self) -> &SigningMetrics {
        &self.metrics
    }
}

/// Verifies `signature` over a SHA-256 digest.
pub fn verify_digest(
    verifying_key: &VerifyingKey,
    digest: &MessageDigest,
    signature: &Signature,
) -> bool {
    verifying_key.verify_prehash(digest, signature).is_ok()
}

/// Verifies an artifact against the public key it carries.
pub fn verify_artifact(artifact: &OutputArtifact) -> Result<(), VerificationError> {
    let public_key = key_codec::parse_public_key_pem(artifact.public_key())?;
    let signature = signature_codec::decode(artifact.signature())?;
    let verifying_key = VerifyingKey::from(&public_key);

    if verify_digest(&verifying_key, &digest(artifact.message()), &signature) {
        Ok(())
    } else {
        Err(VerificationError::InvalidSignature)
    }
}

/// Forwards to the wrapped RNG and records the first failure instead of
/// panicking, so the caller can reject the signature that used it.
struct EntropyGuard<'a, R> {
    inner: &'a mut R,
    failure: Option<rand::Error>,
}

impl<'a, R> EntropyGuard<'a, R> {
    fn new(inner: &'a mut R) -> Self {
        Self {
            inner,
            failure: None,
        }
    }
}

impl<R: RngCore> RngCore for EntropyGuard<'_, R> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.inner.try_fill_bytes(dest) {
            dest.fill(0);
            if self.failure.is_none() {
                self.failure = Some(e);
            }
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        match &self.failure {
            Some(_) => Err(rand::Error::new("entropy source failed earlier in this call")),
            None => Ok(()),
        }
    }
}

impl<R: CryptoRng> CryptoRng for EntropyGuard<'_, R> {}
