//! Application Configuration
//!
//! Configuration for the Auth application layer, read from the environment.

use std::time::Duration;

use platform::cookie::CookieConfig;

use crate::error::{AuthError, AuthResult};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Default session cookie name
pub const DEFAULT_COOKIE_NAME: &str = "artblog_token";

/// Default token lifetime (7 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub cookie_name: String,
    /// HS256 signing key
    pub jwt_secret: Vec<u8>,
    /// Token lifetime; also the cookie Max-Age
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            jwt_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Config with a random per-process signing key.
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            jwt_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Load from process environment.
    pub fn from_env() -> AuthResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    ///
    /// Recognized keys: `JWT_SECRET`, `JWT_EXPIRES_IN`, `AUTH_COOKIE_NAME`,
    /// `APP_ENV` (falling back to `NODE_ENV`). Outside production a missing
    /// `JWT_SECRET` is replaced by a random key; in production it is fatal.
    pub fn from_lookup<F>(lookup: F) -> AuthResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let production = non_empty("APP_ENV")
            .or_else(|| non_empty("NODE_ENV"))
            .is_some_and(|env| env.trim().eq_ignore_ascii_case("production"));

        let mut config = match non_empty("JWT_SECRET") {
            Some(secret) => Self {
                jwt_secret: secret.into_bytes(),
                ..Self::default()
            },
            None if production => return Err(AuthError::MissingSigningKey),
            None => {
                tracing::warn!("JWT_SECRET not set, using a random per-process key");
                Self::with_random_secret()
            }
        };

        config.cookie_secure = production;

        if let Some(name) = non_empty("AUTH_COOKIE_NAME") {
            config.cookie_name = name.trim().to_string();
        }

        if let Some(raw) = non_empty("JWT_EXPIRES_IN") {
            config.token_ttl = parse_ttl(&raw).ok_or_else(|| {
                AuthError::InvalidConfig(format!("JWT_EXPIRES_IN has an unsupported value: {raw}"))
            })?;
        }

        Ok(config)
    }

    /// Cookie settings for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl.as_secs()),
        }
    }
}

/// Parse a token lifetime in the `ms` package notation: `7d`, `12h`,
/// `1.5h`, `90 minutes`, `2 weeks`, `1y`. Units are case-insensitive and a
/// year is 365.25 days. A bare number counts seconds. Sub-second remainders
/// are dropped and anything under one second is rejected.
pub fn parse_ttl(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);

    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    let unit_secs = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "sec" | "secs" | "second" | "seconds" => 1.0,
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 0.001,
        "m" | "min" | "mins" | "minute" | "minutes" => 60.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600.0,
        "d" | "day" | "days" => 86_400.0,
        "w" | "week" | "weeks" => 604_800.0,
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600.0,
        _ => return None,
    };

    let secs = (value * unit_secs).floor();
    if !(1.0..u64::MAX as f64).contains(&secs) {
        return None;
    }
    Some(Duration::from_secs(secs as u64))
}
