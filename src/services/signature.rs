//! Ed25519 verification of inbound webhook requests.

use ed25519_dalek::{Signature, VerifyingKey};
use thiserror::Error;

/// Reasons a request signature is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("public key is not a valid hex encoded Ed25519 key")]
    InvalidPublicKey,
    #[error("signature is not 64 hex encoded bytes")]
    MalformedSignature,
    #[error("signature does not match the request")]
    Mismatch,
}

/// Checks that requests were signed by the platform's application key.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Build a verifier from the hex encoded public key shown in the developer portal.
    pub fn from_hex(public_key: &str) -> Result<Self, VerifyError> {
        let bytes: [u8; 32] = hex::decode(public_key.trim())
            .ok()
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(VerifyError::InvalidPublicKey)?;
        let key = VerifyingKey::from_bytes(&bytes).map_err(|_| VerifyError::InvalidPublicKey)?;
        Ok(Self::new(key))
    }

    /// Verify `signature` over `timestamp || body`.
    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> Result<(), VerifyError> {
        let bytes: [u8; 64] = hex::decode(signature.trim())
            .ok()
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(VerifyError::MalformedSignature)?;
        let signature = Signature::from_bytes(&bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify_strict(&message, &signature)
            .map_err(|_| VerifyError::Mismatch)
    }
}
