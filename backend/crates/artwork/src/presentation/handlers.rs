//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRef, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use auth::TokenService;
use auth::presentation::AdminSession;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::{
    CreateArtworkUseCase, DeleteArtworkUseCase, QueryArtworksUseCase, UpdateArtworkUseCase,
};
use crate::domain::entities::ArtworkFilter;
use crate::domain::repository::ArtworkRepository;
use crate::error::ArtworkResult;
use crate::presentation::dto::{
    ArtworkListResponse, ArtworkResponse, CreateArtworkRequest, ListArtworksQuery,
    MessageResponse, UpdateArtworkRequest,
};

/// Shared state for artwork handlers
#[derive(Clone)]
pub struct ArtworkAppState<R>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

impl<R> FromRef<ArtworkAppState<R>> for Arc<TokenService>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &ArtworkAppState<R>) -> Self {
        state.tokens.clone()
    }
}

// ============================================================================
// Public
// ============================================================================

/// GET /api/artworks?limit=&featured=
pub async fn list_artworks<R>(
    State(state): State<ArtworkAppState<R>>,
    query: Result<Query<ListArtworksQuery>, QueryRejection>,
) -> ArtworkResult<Json<ArtworkListResponse>>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query.map_err(AppError::from)?;
    let filter = ArtworkFilter::from_query(query.featured.as_deref(), query.limit.as_deref());
    let artworks = QueryArtworksUseCase::new(state.repo.clone())
        .list(filter)
        .await?;

    Ok(Json(ArtworkListResponse::new(artworks)))
}

/// GET /api/artworks/{id}
pub async fn get_artwork<R>(
    State(state): State<ArtworkAppState<R>>,
    Path(id): Path<String>,
) -> ArtworkResult<Json<ArtworkResponse>>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    let artwork = QueryArtworksUseCase::new(state.repo.clone())
        .get(&id)
        .await?;

    Ok(Json(ArtworkResponse::new(artwork)))
}

// ============================================================================
// Admin
// ============================================================================

/// POST /api/artworks
pub async fn create_artwork<R>(
    State(state): State<ArtworkAppState<R>>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<CreateArtworkRequest>, JsonRejection>,
) -> ArtworkResult<impl IntoResponse>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    tracing::debug!(admin_id = %admin.admin_id, "Creating artwork");

    let artwork = CreateArtworkUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ArtworkResponse::new(artwork))))
}

/// PUT /api/artworks/{id}
pub async fn update_artwork<R>(
    State(state): State<ArtworkAppState<R>>,
    AdminSession(admin): AdminSession,
    Path(id): Path<String>,
    payload: Result<Json<UpdateArtworkRequest>, JsonRejection>,
) -> ArtworkResult<Json<ArtworkResponse>>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    tracing::debug!(admin_id = %admin.admin_id, artwork_id = %id, "Updating artwork");

    let artwork = UpdateArtworkUseCase::new(state.repo.clone())
        .execute(&id, req.into())
        .await?;

    Ok(Json(ArtworkResponse::new(artwork)))
}

/// DELETE /api/artworks/{id}
pub async fn delete_artwork<R>(
    State(state): State<ArtworkAppState<R>>,
    AdminSession(admin): AdminSession,
    Path(id): Path<String>,
) -> ArtworkResult<Json<MessageResponse>>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    tracing::debug!(admin_id = %admin.admin_id, artwork_id = %id, "Deleting artwork");

    DeleteArtworkUseCase::new(state.repo.clone())
        .execute(&id)
        .await?;

    Ok(Json(MessageResponse {
        ok: true,
        message: "Deleted".to_string(),
    }))
}
