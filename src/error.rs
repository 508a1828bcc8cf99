//! Error types for admin session tokens
//!
//! Two families live here. [`Error`] covers construction and encoding
//! failures, which callers treat as fatal. [`Rejection`] is the outcome of a
//! failed verification; it is an expected result, not an exceptional one.

use thiserror::Error;

/// Errors raised while configuring the service or issuing a token
#[derive(Error, Debug)]
pub enum Error {
    /// The HMAC secret is absent or empty
    #[error("Admin session secret is missing or empty. Set a strong random value before starting")]
    MissingSecret,

    /// The configured session lifetime is not a positive integer
    #[error("Invalid session TTL: {0}")]
    InvalidTtl(String),

    /// Any other unusable configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Base64url encoding failed
    #[error("Base64 encoding error: {0:?}")]
    Encoding(ct_codecs::Error),

    /// Claims could not be serialized
    #[error("Claims serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a presented token was not accepted.
///
/// All variants mean "unauthenticated" to the outside world. The distinction
/// is kept for logs and must not be echoed back to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No token, or an empty one
    #[error("No session token was presented")]
    MissingToken,

    /// The token is not exactly two non-empty segments
    #[error("Malformed session token. Expected exactly two non-empty segments")]
    MalformedToken,

    /// The signature segment does not match the recomputed signature
    #[error("Session token signature does not match")]
    SignatureMismatch,

    /// The claims segment is not valid base64url or not the claims shape
    #[error("Session token claims could not be decoded")]
    DecodeFailure,

    /// The claims carry an unsupported version, an unknown subject, or an inverted lifetime
    #[error("Session token claims are not valid for this service")]
    InvalidClaims,

    /// The token's expiration time has passed
    #[error("Session token expired")]
    Expired,
}

impl Rejection {
    /// Short stable code suitable for structured logs
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::MissingToken => "missing",
            Rejection::MalformedToken => "format",
            Rejection::SignatureMismatch => "signature",
            Rejection::DecodeFailure => "json",
            Rejection::InvalidClaims => "claims",
            Rejection::Expired => "expired",
        }
    }
}
