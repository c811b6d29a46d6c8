//! Artwork Queries
//!
//! Public, read-only.

use std::sync::Arc;

use kernel::id::ArtworkId;

use crate::domain::entities::{Artwork, ArtworkFilter};
use crate::domain::repository::ArtworkRepository;
use crate::error::{ArtworkError, ArtworkResult};

pub struct QueryArtworksUseCase<R>
where
    R: ArtworkRepository,
{
    repo: Arc<R>,
}

impl<R> QueryArtworksUseCase<R>
where
    R: ArtworkRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Newest first
    pub async fn list(&self, filter: ArtworkFilter) -> ArtworkResult<Vec<Artwork>> {
        self.repo.list(&filter).await
    }

    /// Ids that are not valid identifiers are simply not found.
    pub async fn get(&self, id: &str) -> ArtworkResult<Artwork> {
        let id = ArtworkId::parse(id).ok_or(ArtworkError::NotFound)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or(ArtworkError::NotFound)
    }
}
