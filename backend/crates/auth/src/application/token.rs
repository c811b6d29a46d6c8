//! Token Service
//!
//! Stateless session tokens: an HS256 JWT carrying the administrator id and
//! email, delivered in an HTTP-only cookie. Nothing is stored server-side;
//! a token is valid exactly when its signature checks out and it has not
//! expired.

use std::time::Duration;

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::AdminId;
use platform::cookie::{CookieConfig, extract_cookie};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Identity carried by a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub admin_id: AdminId,
    pub email: String,
}

/// Wire form of the JWT payload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    admin_id: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    cookie: CookieConfig,
}

impl TokenService {
    /// Build the service. An empty signing key is a fatal misconfiguration.
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        if config.jwt_secret.is_empty() {
            return Err(AuthError::MissingSigningKey);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        let service = Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            ttl: config.token_ttl,
            cookie: config.cookie_config(),
        };
        service.expiry(Utc::now())?;

        Ok(service)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Sign `claims` with an expiry of now + TTL.
    pub fn issue(&self, claims: &SessionClaims) -> AuthResult<String> {
        self.issue_at(claims, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        claims: &SessionClaims,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let payload = TokenClaims {
            admin_id: claims.admin_id.to_string(),
            email: claims.email.clone(),
            iat: issued_at.timestamp(),
            exp: self.expiry(issued_at)?.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign session token: {e}")))
    }

    fn expiry(&self, issued_at: DateTime<Utc>) -> AuthResult<DateTime<Utc>> {
        chrono::Duration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| {
                AuthError::InvalidConfig(format!(
                    "Token TTL of {}s is out of range",
                    self.ttl.as_secs()
                ))
            })
    }

    /// Check signature and expiry.
    ///
    /// Every failure (bad format, wrong signature, expired, unexpected
    /// payload) is reported as [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                tracing::debug!(error = %e, "Session token rejected");
                AuthError::InvalidToken
            },
        )?;

        let admin_id = AdminId::parse(&data.claims.admin_id).ok_or(AuthError::InvalidToken)?;

        Ok(SessionClaims {
            admin_id,
            email: data.claims.email,
        })
    }

    /// Read the session cookie from request headers and verify it.
    pub fn verify_headers(&self, headers: &HeaderMap) -> AuthResult<SessionClaims> {
        let token = extract_cookie(headers, self.cookie_name())
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;
        self.verify(&token)
    }

    /// Set-Cookie value carrying `token`. `ttl` defaults to the token TTL.
    pub fn to_cookie(&self, token: &str, ttl: Option<Duration>) -> String {
        self.cookie
            .build_set_cookie(token, Some(ttl.unwrap_or(self.ttl).as_secs()))
    }

    /// Set-Cookie value that removes the session cookie.
    pub fn clear_cookie(&self) -> String {
        self.cookie.build_delete_cookie()
    }
}
