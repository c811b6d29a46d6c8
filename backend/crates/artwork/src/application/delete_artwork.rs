//! Delete Artwork Use Case

use std::sync::Arc;

use kernel::id::ArtworkId;

use crate::domain::repository::ArtworkRepository;
use crate::error::{ArtworkError, ArtworkResult};

pub struct DeleteArtworkUseCase<R>
where
    R: ArtworkRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteArtworkUseCase<R>
where
    R: ArtworkRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Hard delete. A second delete of the same id is `NotFound`.
    pub async fn execute(&self, id: &str) -> ArtworkResult<()> {
        let id = ArtworkId::parse(id).ok_or(ArtworkError::NotFound)?;

        if !self.repo.delete(&id).await? {
            return Err(ArtworkError::NotFound);
        }

        tracing::info!(artwork_id = %id, "Artwork deleted");
        Ok(())
    }
}
