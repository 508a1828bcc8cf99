//! # Constants for admin session tokens
//!
//! Centralized constants for the claim values the verifier recognizes, the
//! token wire format, session defaults and configuration keys.

/// Values carried in (and checked against) the claims of every token
pub mod claim_values {
    /// The only claims format version currently issued and accepted
    pub const VERSION: u32 = 1;
    /// Subject marker for the single principal kind, the administrator
    pub const ADMIN_SUBJECT: &str = "admin";
}

/// Token wire format
pub mod token_format {
    /// Separator between the claims segment and the signature segment.
    /// Never part of the base64url alphabet.
    pub const SEPARATOR: char = '.';
    /// Length in bytes of an HMAC-SHA256 tag
    pub const TAG_LEN: usize = 32;
    /// Length of an HMAC-SHA256 tag once base64url encoded without padding
    pub const ENCODED_TAG_LEN: usize = 43;
}

/// Defaults for the admin session lifecycle
pub mod session_defaults {
    /// Default session lifetime: 7 days
    pub const TTL_SECS: u64 = 60 * 60 * 24 * 7;
    /// Name of the cookie holding the session token
    pub const COOKIE_NAME: &str = "admin_session";
    /// Cookie path
    pub const COOKIE_PATH: &str = "/";
}

/// Environment variables read by [`AuthConfig::from_env`](crate::config::AuthConfig::from_env)
pub mod env_vars {
    /// HMAC secret (required)
    pub const AUTH_SECRET: &str = "ADMIN_AUTH_SECRET";
    /// Session lifetime in seconds (optional)
    pub const SESSION_TTL_SECS: &str = "ADMIN_SESSION_TTL_SECS";
    /// Whether cookies get the `Secure` attribute (optional)
    pub const COOKIE_SECURE: &str = "ADMIN_COOKIE_SECURE";
    /// Log level for the CLI
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}
