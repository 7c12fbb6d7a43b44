//! The signed output artifact and its JSON form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Indentation used for the human-readable JSON form.
const JSON_INDENT: &[u8] = b"    ";

/// Errors that can occur while serializing or parsing an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Artifact encoding error: {reason}")]
    Encoding { reason: String },
}

/// Message, signature and public key bound together. Field order is fixed:
/// `message`, `signature`, `pubkey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputArtifact {
    message: String,
    signature: String,
    #[serde(rename = "pubkey")]
    public_key: String,
}

impl OutputArtifact {
    pub fn new(
        message: impl Into<String>,
        signature: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            signature: signature.into(),
            public_key: public_key.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Base64 of the DER-encoded signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Armored SPKI public key, exactly as supplied at signing time.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Indented JSON with the three fields in fixed order.
    pub fn to_json_pretty(&self) -> Result<String, ArtifactError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| ArtifactError::Encoding {
            reason: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(text)?)
    }
}
