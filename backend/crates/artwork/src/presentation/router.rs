//! Artwork Router

use axum::{Router, routing::get};
use auth::TokenService;
use std::sync::Arc;

use crate::domain::repository::ArtworkRepository;
use crate::presentation::handlers::{self, ArtworkAppState};
use crate::presentation::pages;

/// Create the Artwork API router for any repository implementation.
/// Mount under `/api/artworks`.
pub fn artwork_router<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    let state = ArtworkAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_artworks::<R>).post(handlers::create_artwork::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_artwork::<R>)
                .put(handlers::update_artwork::<R>)
                .delete(handlers::delete_artwork::<R>),
        )
        .with_state(state)
}

/// Admin page routes, mounted at the root (`/admin/...`)
pub fn admin_pages_router<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    let state = ArtworkAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route("/admin/dashboard", get(pages::dashboard::<R>))
        .with_state(state)
}
