//! Canonical encoding of claims into a token segment
//!
//! Claims are serialized as compact JSON in declaration order and then
//! base64url encoded without padding. For a fixed set of claim values the
//! output is byte-identical across calls and processes.

use crate::claims::Claims;
use crate::error::Error;
use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};
use thiserror::Error;

/// Failure to turn a segment back into claims
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Not valid base64url without padding
    #[error("Segment is not valid base64url: {0:?}")]
    Alphabet(ct_codecs::Error),

    /// Decoded bytes are not a JSON object
    #[error("Segment does not hold a JSON object")]
    NotAnObject,

    /// Decoded bytes are not exactly the claims shape
    #[error("Segment does not hold well-formed claims: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Encode claims into the first token segment
pub fn encode_claims(claims: &Claims) -> Result<String, Error> {
    let json = serde_json::to_vec(claims)?;
    encode_segment(&json)
}

/// Decode the first token segment back into claims.
///
/// Only call this on a segment whose signature has already been checked.
pub fn decode_claims(segment: &str) -> Result<Claims, DecodeError> {
    let json = Base64UrlSafeNoPadding::decode_to_vec(segment, None).map_err(DecodeError::Alphabet)?;

    // Derived struct deserializers also accept sequences
    if json.iter().find(|b| !b.is_ascii_whitespace()) != Some(&b'{') {
        return Err(DecodeError::NotAnObject);
    }

    Ok(serde_json::from_slice(&json)?)
}

/// Base64url encode arbitrary bytes without padding
pub(crate) fn encode_segment(bytes: &[u8]) -> Result<String, Error> {
    Base64UrlSafeNoPadding::encode_to_string(bytes).map_err(Error::Encoding)
}
