//! # Claims for admin session tokens
//!
//! A token asserts a small, fixed set of facts:
//!
//! - **v** (Version): format version, currently always `1`.
//! - **sub** (Subject): the principal kind. There is exactly one, the administrator.
//! - **iat** (Issued At): seconds since the Unix epoch at which the token was issued.
//! - **exp** (Expiration Time): seconds since the Unix epoch on or after which the token
//!   MUST NOT be accepted.
//!
//! Field declaration order is the canonical encoding order; do not reorder.

use crate::constants::claim_values;
use crate::error::Rejection;
use crate::utils::current_timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Claims carried by an admin session token.
///
/// # Example
///
/// ```
/// use admin_session::Claims;
///
/// let claims = Claims::issued_at(1_700_000_000, 3600);
/// assert_eq!(claims.version, 1);
/// assert_eq!(claims.subject, "admin");
/// assert_eq!(claims.expires_at, 1_700_003_600);
/// assert!(claims.validate_at(1_700_000_001).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Format version
    #[serde(rename = "v")]
    pub version: u32,
    /// Principal kind
    #[serde(rename = "sub")]
    pub subject: String,
    /// Issued at (seconds since Unix epoch)
    #[serde(rename = "iat")]
    pub issued_at: u64,
    /// Expiration time (seconds since Unix epoch)
    #[serde(rename = "exp")]
    pub expires_at: u64,
}

/// Reasons a decoded set of claims is not acceptable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    /// Version other than the one this service issues
    #[error("Unsupported claims version {0}")]
    UnsupportedVersion(u32),

    /// Subject other than the administrator marker
    #[error("Unknown subject '{0}'")]
    UnknownSubject(String),

    /// Expiration is not after issuance
    #[error("Expiration {expires_at} is not after issuance {issued_at}")]
    InvertedLifetime {
        /// Issued at
        issued_at: u64,
        /// Expiration time
        expires_at: u64,
    },

    /// Expiration time has passed
    #[error("Expired at {expires_at}, now {now}")]
    Expired {
        /// Expiration time
        expires_at: u64,
        /// Time of the check
        now: u64,
    },
}

impl From<ClaimsError> for Rejection {
    fn from(err: ClaimsError) -> Self {
        match err {
            ClaimsError::Expired { .. } => Rejection::Expired,
            ClaimsError::UnsupportedVersion(_)
            | ClaimsError::UnknownSubject(_)
            | ClaimsError::InvertedLifetime { .. } => Rejection::InvalidClaims,
        }
    }
}

impl Claims {
    /// Builds admin claims valid for `ttl_secs` seconds from now.
    ///
    /// # Panics
    ///
    /// Panics if `ttl_secs` is zero or pushes the expiration past `u64::MAX`.
    pub fn build(ttl_secs: u64) -> Self {
        Self::issued_at(current_timestamp(), ttl_secs)
    }

    /// Builds admin claims issued at `now` and valid for `ttl_secs` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `ttl_secs` is zero or `now + ttl_secs` overflows.
    pub fn issued_at(now: u64, ttl_secs: u64) -> Self {
        assert!(ttl_secs > 0, "session ttl must be positive");
        let expires_at = now
            .checked_add(ttl_secs)
            .unwrap_or_else(|| panic!("session ttl {ttl_secs} overflows the timestamp range"));

        Self {
            version: claim_values::VERSION,
            subject: claim_values::ADMIN_SUBJECT.to_string(),
            issued_at: now,
            expires_at,
        }
    }

    /// Validates the claims against the current time
    pub fn validate(&self) -> Result<(), ClaimsError> {
        self.validate_at(current_timestamp())
    }

    /// Validates the claims against `now`.
    ///
    /// Checks run in order: version, subject, lifetime shape, expiry.
    pub fn validate_at(&self, now: u64) -> Result<(), ClaimsError> {
        if self.version != claim_values::VERSION {
            return Err(ClaimsError::UnsupportedVersion(self.version));
        }

        if self.subject != claim_values::ADMIN_SUBJECT {
            return Err(ClaimsError::UnknownSubject(self.subject.clone()));
        }

        if self.expires_at <= self.issued_at {
            return Err(ClaimsError::InvertedLifetime {
                issued_at: self.issued_at,
                expires_at: self.expires_at,
            });
        }

        if self.is_expired_at(now) {
            return Err(ClaimsError::Expired {
                expires_at: self.expires_at,
                now,
            });
        }

        Ok(())
    }

    /// Whether the expiration time is at or before `now`
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.expires_at <= now
    }

    /// Time left before expiry, or `None` once expired
    pub fn remaining_at(&self, now: u64) -> Option<Duration> {
        if self.is_expired_at(now) {
            None
        } else {
            Some(Duration::from_secs(self.expires_at - now))
        }
    }
}
