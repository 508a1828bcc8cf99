//! # Admin Session Tokens
//!
//! Stateless session tokens that prove a request comes from someone who
//! previously supplied the admin credentials, without any server-side session store.
//!
//! ## Overview
//!
//! A token is two base64url segments joined by a dot:
//!
//! ```text
//! <base64url({"v":1,"sub":"admin","iat":<int>,"exp":<int>})>.<base64url(HMAC-SHA256(secret, segment1))>
//! ```
//!
//! Validity is computed, never looked up. A token stays valid until its
//! `exp` passes; rotating the secret invalidates every outstanding token.
//!
//! ## Features
//!
//! - Deterministic JSON claims encoding, base64url without padding
//! - HMAC-SHA256 signatures keyed by an injected secret
//! - Constant-time signature comparison
//! - Claims are parsed only after the signature is authenticated
//! - A closed set of rejection reasons; verification never panics
//! - Environment-driven configuration and session cookie helpers
//!
//! ## Basic Example
//!
//! ```rust
//! use admin_session::{Rejection, Secret, SessionService};
//!
//! let service = SessionService::new(Secret::new("my-admin-secret").expect("non-empty secret"));
//!
//! // Issue a token valid for 7 days
//! let token = service.issue(604_800).expect("Failed to issue token");
//!
//! // Verify it
//! let claims = service.verify(Some(&token)).expect("Token should be accepted");
//! assert_eq!(claims.subject, "admin");
//!
//! // Anything else is rejected with a reason meant for logs only
//! assert_eq!(service.verify(Some("onlyonesegmentnodots")), Err(Rejection::MalformedToken));
//! ```
//!
//! ## Configuration Example
//!
//! ```rust
//! use admin_session::{AuthConfig, SessionCookie, SessionService};
//!
//! let config = AuthConfig::from_lookup(|key| match key {
//!     "ADMIN_AUTH_SECRET" => Some("my-admin-secret".to_string()),
//!     _ => None,
//! })
//! .expect("Failed to load configuration");
//!
//! let service = SessionService::from_config(&config);
//! let token = service.issue(config.session_ttl_secs).expect("Failed to issue token");
//! let cookie = SessionCookie::issued(token, config.session_ttl_secs, config.secure_cookies);
//!
//! assert!(cookie.to_header_value().contains("Max-Age=604800"));
//! ```

pub mod claims;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod session;
pub mod signer;
pub mod token;
pub mod utils;

pub use claims::{Claims, ClaimsError};
pub use codec::{decode_claims, encode_claims, DecodeError};
pub use config::AuthConfig;
pub use constants::{claim_values, env_vars, session_defaults, token_format};
pub use error::{Error, Rejection};
pub use session::{token_from_cookie_header, AdminStatus, SameSite, SessionCookie};
pub use signer::{Secret, Signer};
pub use token::{SessionService, Verification};
pub use utils::{constant_time_eq, current_timestamp};
