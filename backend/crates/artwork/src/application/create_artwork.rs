//! Create Artwork Use Case

use std::sync::Arc;

use crate::domain::entities::{Artwork, ArtworkDraft};
use crate::domain::repository::ArtworkRepository;
use crate::domain::services::{MAX_SLUG_ATTEMPTS, slug_candidates};
use crate::domain::value_objects::{ArtworkStatus, Slug};
use crate::error::{ArtworkError, ArtworkResult, REQUIRED_FIELDS_MESSAGE};

/// Raw create input as submitted
#[derive(Debug, Clone, Default)]
pub struct CreateArtworkInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
}

impl CreateArtworkInput {
    /// Check required fields and parse the status. Returns the draft and
    /// the base slug (caller-supplied if non-blank, else derived from the
    /// title).
    fn validate(self) -> ArtworkResult<(ArtworkDraft, Slug)> {
        let title = self.title.filter(|t| !t.trim().is_empty());
        let description = self.description.filter(|d| !d.trim().is_empty());
        let images = self.images.filter(|i| !i.is_empty());

        let (Some(title), Some(description), Some(images)) = (title, description, images) else {
            return Err(ArtworkError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        let status = match self.status.as_deref() {
            Some(raw) => raw
                .parse::<ArtworkStatus>()
                .map_err(|e| ArtworkError::Validation(e.to_string()))?,
            None => ArtworkStatus::default(),
        };

        let base_slug = self
            .slug
            .as_deref()
            .and_then(Slug::parse)
            .unwrap_or_else(|| Slug::from_title(&title));

        let draft = ArtworkDraft {
            title,
            description,
            images,
            status,
            featured: self.featured.unwrap_or(false),
        };

        Ok((draft, base_slug))
    }
}

/// Create Artwork Use Case
///
/// Slug assignment walks `base`, `base-1`, `base-2`, …. The existence check
/// only skips obviously taken candidates; the store's unique constraint
/// decides, and a lost race moves on to the next candidate.
pub struct CreateArtworkUseCase<R>
where
    R: ArtworkRepository,
{
    repo: Arc<R>,
    max_slug_attempts: u32,
}

impl<R> CreateArtworkUseCase<R>
where
    R: ArtworkRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            max_slug_attempts: MAX_SLUG_ATTEMPTS,
        }
    }

    pub fn with_max_slug_attempts(mut self, max_slug_attempts: u32) -> Self {
        self.max_slug_attempts = max_slug_attempts;
        self
    }

    pub async fn execute(&self, input: CreateArtworkInput) -> ArtworkResult<Artwork> {
        let (draft, base_slug) = input.validate()?;
        let mut artwork = Artwork::new(draft, base_slug.clone());

        for candidate in slug_candidates(&base_slug, self.max_slug_attempts) {
            if self.repo.slug_exists(&candidate).await? {
                continue;
            }

            artwork.slug = candidate;
            match self.repo.insert(&artwork).await {
                Ok(created) => {
                    tracing::info!(
                        artwork_id = %created.id,
                        slug = %created.slug,
                        "Artwork created"
                    );
                    return Ok(created);
                }
                Err(ArtworkError::SlugTaken) => {
                    tracing::debug!(slug = %artwork.slug, "Slug claimed concurrently, trying next");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(base = %base_slug, attempts = self.max_slug_attempts, "No free slug");
        Err(ArtworkError::SlugExhausted)
    }
}
