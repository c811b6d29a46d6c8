//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ArtworkId;

use crate::domain::entities::{Artwork, ArtworkFilter, ArtworkPatch};
use crate::domain::value_objects::Slug;
use crate::error::ArtworkResult;

/// Artwork store. Slug uniqueness is enforced here, not by callers.
#[trait_variant::make(ArtworkRepository: Send)]
pub trait LocalArtworkRepository {
    /// Newest first, filtered and capped by `filter`
    async fn list(&self, filter: &ArtworkFilter) -> ArtworkResult<Vec<Artwork>>;

    async fn find_by_id(&self, id: &ArtworkId) -> ArtworkResult<Option<Artwork>>;

    /// Advisory check; a later `insert` may still lose a race.
    async fn slug_exists(&self, slug: &Slug) -> ArtworkResult<bool>;

    /// Store a new artwork and return the stored record.
    /// Fails with `ArtworkError::SlugTaken` if the slug is held.
    async fn insert(&self, artwork: &Artwork) -> ArtworkResult<Artwork>;

    /// Apply `patch`. `Ok(None)` if there is no such artwork;
    /// `ArtworkError::SlugTaken` if the new slug is held by another one.
    async fn update(&self, id: &ArtworkId, patch: &ArtworkPatch)
    -> ArtworkResult<Option<Artwork>>;

    /// Hard delete. Returns whether a record was removed.
    async fn delete(&self, id: &ArtworkId) -> ArtworkResult<bool>;
}
