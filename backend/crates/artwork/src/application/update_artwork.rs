//! Update Artwork Use Case

use std::sync::Arc;

use kernel::id::ArtworkId;

use crate::domain::entities::{Artwork, ArtworkPatch};
use crate::domain::repository::ArtworkRepository;
use crate::domain::value_objects::{ArtworkStatus, Slug};
use crate::error::{ArtworkError, ArtworkResult};

/// Raw partial update; absent fields are left alone
#[derive(Debug, Clone, Default)]
pub struct UpdateArtworkInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub slug: Option<String>,
}

impl UpdateArtworkInput {
    /// Provided values must satisfy the same rules as on create.
    fn validate(self) -> ArtworkResult<ArtworkPatch> {
        fn non_blank(field: &str, value: Option<String>) -> ArtworkResult<Option<String>> {
            match value {
                Some(v) if v.trim().is_empty() => Err(ArtworkError::Validation(format!(
                    "{field} cannot be empty"
                ))),
                other => Ok(other),
            }
        }

        let title = non_blank("title", self.title)?;
        let description = non_blank("description", self.description)?;

        if self.images.as_ref().is_some_and(|i| i.is_empty()) {
            return Err(ArtworkError::Validation(
                "images[] cannot be empty".to_string(),
            ));
        }

        let status = self
            .status
            .as_deref()
            .map(str::parse::<ArtworkStatus>)
            .transpose()
            .map_err(|e| ArtworkError::Validation(e.to_string()))?;

        let slug = match self.slug.as_deref() {
            Some(raw) => Some(
                Slug::parse(raw)
                    .ok_or_else(|| ArtworkError::Validation("slug cannot be empty".to_string()))?,
            ),
            None => None,
        };

        Ok(ArtworkPatch {
            title,
            description,
            images: self.images,
            status,
            featured: self.featured,
            slug,
        })
    }
}

/// Update Artwork Use Case
///
/// Last write wins. A slug already held by another artwork is a conflict;
/// it is not re-suffixed.
pub struct UpdateArtworkUseCase<R>
where
    R: ArtworkRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateArtworkUseCase<R>
where
    R: ArtworkRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, input: UpdateArtworkInput) -> ArtworkResult<Artwork> {
        let id = ArtworkId::parse(id).ok_or(ArtworkError::NotFound)?;
        let patch = input.validate()?;

        let updated = self
            .repo
            .update(&id, &patch)
            .await?
            .ok_or(ArtworkError::NotFound)?;

        tracing::info!(artwork_id = %updated.id, slug = %updated.slug, "Artwork updated");

        Ok(updated)
    }
}
