//! In-Memory Repository Implementation
//!
//! Backs tests and local experiments without a database. Enforces the same
//! slug uniqueness as the `artworks_slug_key` constraint.

use std::sync::Arc;

use kernel::id::ArtworkId;
use tokio::sync::RwLock;

use crate::domain::entities::{Artwork, ArtworkFilter, ArtworkPatch};
use crate::domain::repository::ArtworkRepository;
use crate::domain::value_objects::Slug;
use crate::error::{ArtworkError, ArtworkResult};

/// Artworks in insertion order
#[derive(Clone, Default)]
pub struct InMemoryArtworkRepository {
    artworks: Arc<RwLock<Vec<Artwork>>>,
}

impl InMemoryArtworkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtworkRepository for InMemoryArtworkRepository {
    async fn list(&self, filter: &ArtworkFilter) -> ArtworkResult<Vec<Artwork>> {
        let artworks = self.artworks.read().await;

        // Reverse first so equal timestamps keep newest-inserted first
        let mut matching: Vec<Artwork> = artworks
            .iter()
            .rev()
            .filter(|a| !filter.featured_only || a.featured)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(limit) = filter.limit {
            matching.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(matching)
    }

    async fn find_by_id(&self, id: &ArtworkId) -> ArtworkResult<Option<Artwork>> {
        let artworks = self.artworks.read().await;
        Ok(artworks.iter().find(|a| a.id == *id).cloned())
    }

    async fn slug_exists(&self, slug: &Slug) -> ArtworkResult<bool> {
        let artworks = self.artworks.read().await;
        Ok(artworks.iter().any(|a| a.slug == *slug))
    }

    async fn insert(&self, artwork: &Artwork) -> ArtworkResult<Artwork> {
        let mut artworks = self.artworks.write().await;
        if artworks.iter().any(|a| a.slug == artwork.slug) {
            return Err(ArtworkError::SlugTaken);
        }
        artworks.push(artwork.clone());
        Ok(artwork.clone())
    }

    async fn update(
        &self,
        id: &ArtworkId,
        patch: &ArtworkPatch,
    ) -> ArtworkResult<Option<Artwork>> {
        let mut artworks = self.artworks.write().await;

        let Some(index) = artworks.iter().position(|a| a.id == *id) else {
            return Ok(None);
        };

        if let Some(slug) = &patch.slug {
            if artworks.iter().any(|a| a.slug == *slug && a.id != *id) {
                return Err(ArtworkError::SlugTaken);
            }
        }

        let artwork = &mut artworks[index];
        artwork.apply(patch);
        Ok(Some(artwork.clone()))
    }

    async fn delete(&self, id: &ArtworkId) -> ArtworkResult<bool> {
        let mut artworks = self.artworks.write().await;
        let before = artworks.len();
        artworks.retain(|a| a.id != *id);
        Ok(artworks.len() < before)
    }
}
