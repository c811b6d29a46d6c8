//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::{LoginInput, LoginUseCase, TokenService};
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, MessageResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

impl<R> FromRef<AuthAppState<R>> for Arc<TokenService>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AuthAppState<R>) -> Self {
        state.tokens.clone()
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AuthError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());
    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state.tokens.to_cookie(&output.token, None);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::ok("Login successful")),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /api/auth/logout
///
/// Always succeeds; there is no server-side session to revoke.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    tracing::debug!("Session cookie cleared");

    (
        StatusCode::OK,
        [(header::SET_COOKIE, state.tokens.clear_cookie())],
        Json(MessageResponse::ok("Logged out")),
    )
}

// ============================================================================
// Login Page
// ============================================================================

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Admin Login</title>
</head>
<body>
  <h1>Admin Login</h1>
  <form id="login">
    <input name="email" type="email" placeholder="Email" required>
    <input name="password" type="password" placeholder="Password" required>
    <button type="submit">Login</button>
  </form>
  <p id="error" role="alert"></p>
  <script>
    document.getElementById("login").addEventListener("submit", async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const res = await fetch("/api/auth/login", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ email: form.get("email"), password: form.get("password") }),
      });
      if (res.ok) {
        window.location.href = "/admin/dashboard";
      } else {
        const body = await res.json().catch(() => ({}));
        document.getElementById("error").textContent = body.error || "Login failed";
      }
    });
  </script>
</body>
</html>
"#;

/// GET /admin/login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}
