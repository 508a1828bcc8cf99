//! Issuing and verifying admin session tokens
//!
//! A token is `<claims>.<signature>`: base64url of the canonical claims JSON,
//! a dot, and base64url of the HMAC-SHA256 tag over the claims segment text.
//!
//! Verification walks a fixed sequence of stages and stops at the first one
//! that fails:
//!
//! 1. **Received**: an absent or empty token is [`Rejection::MissingToken`].
//! 2. **Split**: anything but two non-empty segments is [`Rejection::MalformedToken`].
//! 3. **Signature checked**: the recomputed signature is compared in constant time;
//!    a difference is [`Rejection::SignatureMismatch`].
//! 4. **Claims decoded**: only now is the claims segment parsed;
//!    failure is [`Rejection::DecodeFailure`].
//! 5. **Claims validated**: see [`Claims::validate_at`]; failure is
//!    [`Rejection::InvalidClaims`] or [`Rejection::Expired`].
//! 6. **Accepted**: the decoded claims are returned.

use crate::claims::Claims;
use crate::codec::{decode_claims, encode_claims};
use crate::config::AuthConfig;
use crate::constants::token_format::SEPARATOR;
use crate::error::{Error, Rejection};
use crate::session::AdminStatus;
use crate::signer::{Secret, Signer};
use crate::utils::{constant_time_eq, current_timestamp};
use tracing::{debug, info, warn};

/// Outcome of verifying a token: the accepted claims, or why it was rejected
pub type Verification = Result<Claims, Rejection>;

/// Issues and verifies admin session tokens.
///
/// Holds nothing but the signer; safe to share across threads and requests.
///
/// # Example
///
/// ```
/// use admin_session::{Rejection, Secret, SessionService};
///
/// let service = SessionService::new(Secret::new("my-admin-secret").unwrap());
/// let token = service.issue(3600).unwrap();
///
/// assert!(service.verify(Some(&token)).is_ok());
/// assert_eq!(service.verify(None), Err(Rejection::MissingToken));
/// ```
#[derive(Debug, Clone)]
pub struct SessionService {
    signer: Signer,
}

impl SessionService {
    /// Create a service keyed by `secret`
    pub fn new(secret: Secret) -> Self {
        Self {
            signer: Signer::new(secret),
        }
    }

    /// Create a service from loaded configuration
    pub fn from_config(config: &AuthConfig) -> Self {
        info!(
            session_ttl_secs = config.session_ttl_secs,
            "admin session service configured"
        );
        Self::new(config.secret.clone())
    }

    /// Issue a token valid for `ttl_secs` seconds from now.
    ///
    /// # Panics
    ///
    /// Panics if `ttl_secs` is zero.
    pub fn issue(&self, ttl_secs: u64) -> Result<String, Error> {
        self.issue_claims(&Claims::build(ttl_secs))
    }

    /// Sign and assemble a token carrying exactly `claims`
    pub fn issue_claims(&self, claims: &Claims) -> Result<String, Error> {
        let body = encode_claims(claims)?;
        let signature = self.signer.sign(body.as_bytes())?;

        debug!(exp = claims.expires_at, "issued admin session token");

        Ok(format!("{body}{SEPARATOR}{signature}"))
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: Option<&str>) -> Verification {
        self.verify_at(token, current_timestamp())
    }

    /// Verify a token against `now` (seconds since Unix epoch)
    pub fn verify_at(&self, token: Option<&str>, now: u64) -> Verification {
        let result = self.run_stages(token, now);
        if let Err(rejection) = &result {
            debug!(reason = rejection.code(), "admin session rejected");
        }
        result
    }

    /// Whether `token` is currently an accepted admin session
    pub fn is_admin(&self, token: Option<&str>) -> bool {
        self.verify(token).is_ok()
    }

    /// Body for a "who am I" status response
    pub fn status(&self, token: Option<&str>) -> AdminStatus {
        AdminStatus {
            is_admin: self.is_admin(token),
        }
    }

    fn run_stages(&self, token: Option<&str>, now: u64) -> Verification {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(Rejection::MissingToken),
        };

        let (body, signature) = split_token(token)?;

        self.check_signature(body, signature)?;

        let claims = decode_claims(body).map_err(|err| {
            debug!(error = %err, "signed claims segment failed to decode");
            Rejection::DecodeFailure
        })?;

        claims.validate_at(now)?;

        Ok(claims)
    }

    fn check_signature(&self, body: &str, signature: &str) -> Result<(), Rejection> {
        let expected = self
            .signer
            .sign(body.as_bytes())
            .map_err(|_| Rejection::SignatureMismatch)?;

        if constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
            Ok(())
        } else {
            warn!("admin session signature mismatch");
            Err(Rejection::SignatureMismatch)
        }
    }
}

/// Split a token into its claims and signature segments
fn split_token(token: &str) -> Result<(&str, &str), Rejection> {
    let mut parts = token.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(body), Some(signature), None) if !body.is_empty() && !signature.is_empty() => {
            Ok((body, signature))
        }
        _ => Err(Rejection::MalformedToken),
    }
}
