//! HMAC-SHA256 signer keyed by the process-wide secret

use crate::codec::encode_segment;
use crate::constants::token_format::TAG_LEN;
use crate::error::Error;
use hmac_sha256::HMAC;
use std::fmt;

/// The HMAC key shared by issuance and verification.
///
/// A string secret is used as its UTF-8 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wrap a secret, rejecting an empty one
    ///
    /// ```
    /// use admin_session::{Error, Secret};
    ///
    /// assert!(Secret::new("correct horse battery staple").is_ok());
    /// assert!(matches!(Secret::new(""), Err(Error::MissingSecret)));
    /// ```
    pub fn new<B: Into<Vec<u8>>>(bytes: B) -> Result<Self, Error> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::MissingSecret);
        }
        Ok(Self(bytes))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Computes authentication tags over token segments
#[derive(Debug, Clone)]
pub struct Signer {
    secret: Secret,
}

impl Signer {
    /// Create a signer for the given secret
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    /// Raw HMAC-SHA256 tag of `message`
    pub fn tag(&self, message: &[u8]) -> [u8; TAG_LEN] {
        HMAC::mac(message, self.secret.as_bytes())
    }

    /// HMAC-SHA256 tag of `message`, base64url encoded for use as the signature segment
    pub fn sign(&self, message: &[u8]) -> Result<String, Error> {
        encode_segment(&self.tag(message))
    }
}
