//! Admin Pages
//!
//! Page routes sit behind both gate tiers. A failed verification redirects
//! to the login page instead of returning an error body.

use axum::Json;
use axum::extract::State;
use auth::presentation::AdminPage;

use crate::application::QueryArtworksUseCase;
use crate::domain::entities::ArtworkFilter;
use crate::domain::repository::ArtworkRepository;
use crate::error::ArtworkResult;
use crate::presentation::dto::{ArtworkDto, DashboardAdmin, DashboardResponse};
use crate::presentation::handlers::ArtworkAppState;

/// GET /admin/dashboard
///
/// Every artwork, newest first, plus the signed-in administrator.
pub async fn dashboard<R>(
    State(state): State<ArtworkAppState<R>>,
    AdminPage(admin): AdminPage,
) -> ArtworkResult<Json<DashboardResponse>>
where
    R: ArtworkRepository + Clone + Send + Sync + 'static,
{
    let artworks = QueryArtworksUseCase::new(state.repo.clone())
        .list(ArtworkFilter::default())
        .await?;

    Ok(Json(DashboardResponse {
        ok: true,
        admin: DashboardAdmin {
            admin_id: admin.admin_id.to_string(),
            email: admin.email,
        },
        artworks: artworks.into_iter().map(ArtworkDto::from).collect(),
    }))
}
