//! # Session transport helpers
//!
//! The token service itself knows nothing about HTTP. These helpers describe
//! how a login handler should store the token (an `HttpOnly`, `SameSite=Lax`
//! cookie whose max-age mirrors the token lifetime), how a logout handler
//! clears it, and how a request handler finds it again.

use crate::constants::session_defaults;
use serde::Serialize;
use std::fmt;

/// `SameSite` cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Sent only on same-site requests
    Strict,
    /// Also sent on top-level cross-site navigations
    Lax,
    /// Always sent; requires `Secure`
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        })
    }
}

/// The session cookie a login or logout response should set.
///
/// # Example
///
/// ```
/// use admin_session::SessionCookie;
///
/// let cookie = SessionCookie::issued("abc.def", 3600, true);
/// assert_eq!(
///     cookie.to_header_value(),
///     "admin_session=abc.def; Path=/; Max-Age=3600; HttpOnly; SameSite=Lax; Secure"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name
    pub name: String,
    /// Cookie value, the token itself
    pub value: String,
    /// Cookie path
    pub path: String,
    /// Max-Age in seconds
    pub max_age_secs: u64,
    /// `HttpOnly` attribute
    pub http_only: bool,
    /// `SameSite` attribute
    pub same_site: SameSite,
    /// `Secure` attribute
    pub secure: bool,
}

impl SessionCookie {
    /// Cookie carrying a freshly issued token that lives as long as the token
    pub fn issued<S: Into<String>>(token: S, ttl_secs: u64, secure: bool) -> Self {
        Self {
            name: session_defaults::COOKIE_NAME.to_string(),
            value: token.into(),
            path: session_defaults::COOKIE_PATH.to_string(),
            max_age_secs: ttl_secs,
            http_only: true,
            same_site: SameSite::Lax,
            secure,
        }
    }

    /// Cookie that makes the client drop its session (logout)
    pub fn cleared(secure: bool) -> Self {
        Self::issued(String::new(), 0, secure)
    }

    /// Render as a `Set-Cookie` header value
    pub fn to_header_value(&self) -> String {
        let mut header = format!(
            "{}={}; Path={}; Max-Age={}",
            self.name, self.value, self.path, self.max_age_secs
        );
        if self.http_only {
            header.push_str("; HttpOnly");
        }
        header.push_str(&format!("; SameSite={}", self.same_site));
        if self.secure {
            header.push_str("; Secure");
        }
        header
    }
}

/// Find the session token in a `Cookie` request header
///
/// ```
/// use admin_session::token_from_cookie_header;
///
/// assert_eq!(token_from_cookie_header("theme=dark; admin_session=abc.def"), Some("abc.def"));
/// assert_eq!(token_from_cookie_header("theme=dark"), None);
/// ```
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == session_defaults::COOKIE_NAME).then_some(value)
    })
}

/// Response body of a "who am I" status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatus {
    /// Whether the request carried an accepted admin session
    pub is_admin: bool,
}
