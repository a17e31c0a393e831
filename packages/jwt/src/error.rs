//! Error types for the trusted signing path and the codec
//!
//! Verification and payload decoding never surface these to callers: they
//! report a [`Diagnostic`](crate::Diagnostic) instead.

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors raised on the trusted-input path (signing, builder misuse).
///
/// These describe programmer or configuration mistakes and are returned
/// immediately to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Algorithm identifier not present in the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Claims could not be represented as a JSON object
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The MAC could not be keyed with the supplied secret
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Builder used without a secret
    #[error("Missing key: {0}")]
    MissingKey(String),

    /// Background task was dropped before producing a result
    #[error("Background task failed")]
    TaskFailed,
}

impl JwtError {
    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: impl Into<String>) -> Self {
        JwtError::UnsupportedAlgorithm(alg.into())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: impl Into<String>) -> Self {
        JwtError::InvalidClaims(msg.into())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        JwtError::Serialization(msg.into())
    }

    /// Create a missing key error
    #[inline]
    #[must_use]
    pub fn missing_key(msg: impl Into<String>) -> Self {
        JwtError::MissingKey(msg.into())
    }
}

/// Failure to turn a base64url segment back into a JSON value.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Segment is not valid unpadded (or correctly padded) base64url
    #[error("base64url decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not the expected JSON
    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
