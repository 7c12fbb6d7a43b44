//! The signing identity: one P-256 key pair.

use std::fmt;

use p256::ecdsa::{SigningKey, VerifyingKey};
use p256::elliptic_curve::rand_core::CryptoRngCore;
use p256::elliptic_curve::subtle::ConstantTimeEq;
use p256::{PublicKey, SecretKey};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// A P-256 private scalar and its public point.
///
/// The secret scalar is zeroized on drop and never appears in `Debug` output.
#[derive(Clone)]
pub struct KeyPair {
    secret: SecretKey,
}

impl KeyPair {
    /// Generates a fresh key pair from a cryptographically secure RNG.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        Self {
            secret: SecretKey::random(rng),
        }
    }

    /// Like [`KeyPair::generate`], but surfaces a failing entropy source as an
    /// error instead of panicking.
    pub fn try_generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, rand::Error> {
        let mut candidate = Zeroizing::new([0u8; 32]);
        loop {
            rng.try_fill_bytes(&mut candidate[..])?;
            // Rejects zero and values at or above the curve order.
            if let Ok(secret) = SecretKey::from_slice(&candidate[..]) {
                return Ok(Self { secret });
            }
        }
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    pub fn public_key(&self) -> PublicKey {
        self.secret.public_key()
    }

    pub fn signing_key(&self) -> SigningKey {
        SigningKey::from(&self.secret)
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey::from(&self.public_key())
    }
}

impl From<SecretKey> for KeyPair {
    fn from(secret: SecretKey) -> Self {
        Self { secret }
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        let lhs = self.secret.to_bytes();
        let rhs = other.secret.to_bytes();
        lhs.as_slice().ct_eq(rhs.as_slice()).into()
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}
