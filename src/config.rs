//! Configuration for the admin session service

use crate::constants::{env_vars, session_defaults};
use crate::error::Error;
use crate::signer::Secret;
use std::env;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret
    pub secret: Secret,
    /// Lifetime of issued sessions, also the cookie max-age
    pub session_ttl_secs: u64,
    /// Whether session cookies carry the `Secure` attribute
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// Loads configuration from environment variables, reading a `.env` file first if present.
    ///
    /// A missing or empty `ADMIN_AUTH_SECRET` is fatal: there is no fallback key.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = Secret::new(lookup(env_vars::AUTH_SECRET).unwrap_or_default())?;

        let session_ttl_secs = match lookup(env_vars::SESSION_TTL_SECS) {
            Some(raw) => parse_ttl(&raw)?,
            None => session_defaults::TTL_SECS,
        };

        let secure_cookies = match lookup(env_vars::COOKIE_SECURE) {
            Some(raw) => parse_flag(env_vars::COOKIE_SECURE, &raw)?,
            None => true,
        };

        Ok(Self {
            secret,
            session_ttl_secs,
            secure_cookies,
        })
    }
}

fn parse_ttl(raw: &str) -> Result<u64, Error> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(Error::InvalidTtl("must be greater than zero".to_string())),
        Ok(ttl) => Ok(ttl),
        Err(_) => Err(Error::InvalidTtl(format!("'{raw}' is not a number of seconds"))),
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::InvalidConfig(format!(
            "{name} must be one of true, false, 1, 0; got '{raw}'"
        ))),
    }
}
