//! Signature encoding: `(R, S)` as a DER `SEQUENCE` of two `INTEGER`s,
//! carried as padded standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use p256::ecdsa::Signature;
use thiserror::Error;

/// Errors that can occur while decoding an encoded signature.
#[derive(Debug, Error)]
pub enum SignatureCodecError {
    #[error("Signature is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Signature is not a valid DER (R, S) sequence: {reason}")]
    Der { reason: String },
}

/// Result type for signature codec operations.
pub type SignatureCodecResult<T> = Result<T, SignatureCodecError>;

/// ASN.1 DER encoding of the signature. R and S keep their minimal magnitude.
pub fn to_der(signature: &Signature) -> Vec<u8> {
    signature.to_der().as_bytes().to_vec()
}

pub fn from_der(bytes: &[u8]) -> SignatureCodecResult<Signature> {
    Signature::from_der(bytes).map_err(|e| SignatureCodecError::Der {
        reason: e.to_string(),
    })
}

/// DER, then padded standard base64.
pub fn encode(signature: &Signature) -> String {
    STANDARD.encode(to_der(signature))
}

pub fn decode(text: &str) -> SignatureCodecResult<Signature> {
    let der = STANDARD.decode(text)?;
    from_der(&der)
}

/// Big-endian magnitudes of R and S without leading zero bytes.
pub fn components(signature: &Signature) -> (Vec<u8>, Vec<u8>) {
    let (r, s) = signature.split_bytes();
    (strip_leading_zeros(&r), strip_leading_zeros(&s))
}

fn strip_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}
