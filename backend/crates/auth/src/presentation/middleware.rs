//! Access Gate
//!
//! Two tiers:
//! - [`require_session_cookie`] runs on every request and only checks that a
//!   session cookie is *present* on admin pages. It never verifies it.
//! - [`AdminSession`] / [`AdminPage`] extractors verify the token at the
//!   point of use.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::extract_cookie;

use crate::application::token::{SessionClaims, TokenService};
use crate::error::AuthError;

/// Where unauthenticated page requests are sent
pub const LOGIN_PATH: &str = "/admin/login";

const ADMIN_PREFIX: &str = "/admin";

// ============================================================================
// Coarse Gate
// ============================================================================

/// Middleware state for the coarse gate
#[derive(Debug, Clone)]
pub struct SessionCookieGate {
    pub cookie_name: String,
}

impl SessionCookieGate {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }
}

/// Admin pages other than the login page.
///
/// `/api`, `/_next`, `/public` and `/static` never match since they sit
/// outside `/admin`.
pub fn is_gated_path(path: &str) -> bool {
    let under = |prefix: &str| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    };

    under(ADMIN_PREFIX) && !under(LOGIN_PATH)
}

/// Redirect to the login page when an admin page is requested without a
/// session cookie.
pub async fn require_session_cookie(
    State(gate): State<SessionCookieGate>,
    req: Request,
    next: Next,
) -> Response {
    if is_gated_path(req.uri().path()) {
        let has_cookie = extract_cookie(req.headers(), &gate.cookie_name)
            .is_some_and(|value| !value.is_empty());

        if !has_cookie {
            tracing::debug!(path = %req.uri().path(), "No session cookie, redirecting to login");
            return Redirect::to(LOGIN_PATH).into_response();
        }
    }

    next.run(req).await
}

// ============================================================================
// Fine Gate
// ============================================================================

/// Verified administrator session for API handlers.
///
/// Rejects with 401 `{ ok: false, error }`.
pub struct AdminSession(pub SessionClaims);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = Arc::<TokenService>::from_ref(state);
        tokens.verify_headers(&parts.headers).map(Self)
    }
}

/// Verified administrator session for page handlers.
///
/// Rejects with a redirect to [`LOGIN_PATH`].
pub struct AdminPage(pub SessionClaims);

impl<S> FromRequestParts<S> for AdminPage
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = Arc::<TokenService>::from_ref(state);
        tokens.verify_headers(&parts.headers).map(Self).map_err(|e| {
            tracing::debug!(error = %e, path = %parts.uri.path(), "Page session rejected");
            Redirect::to(LOGIN_PATH)
        })
    }
}
