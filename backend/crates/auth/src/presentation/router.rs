//! Auth Router

use axum::{Router, routing::get, routing::post};
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::repository::AdminRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation.
/// Mount under `/api/auth`.
pub fn auth_router<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/logout", get(handlers::logout::<R>))
        .with_state(state)
}
