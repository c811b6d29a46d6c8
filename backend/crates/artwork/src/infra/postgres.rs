//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::ArtworkId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Artwork, ArtworkFilter, ArtworkPatch};
use crate::domain::repository::ArtworkRepository;
use crate::domain::value_objects::{ArtworkStatus, Slug};
use crate::error::{ArtworkError, ArtworkResult};

const ARTWORK_COLUMNS: &str = r#"
    id,
    title,
    description,
    images,
    status,
    slug,
    featured,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed artwork store
#[derive(Clone)]
pub struct PgArtworkRepository {
    pool: PgPool,
}

impl PgArtworkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Unique violations on `artworks` can only come from the slug; ids are
/// random v4 UUIDs.
fn map_write_error(err: sqlx::Error) -> ArtworkError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ArtworkError::SlugTaken,
        _ => ArtworkError::Database(err),
    }
}

// ============================================================================
// Artwork Repository Implementation
// ============================================================================

impl ArtworkRepository for PgArtworkRepository {
    async fn list(&self, filter: &ArtworkFilter) -> ArtworkResult<Vec<Artwork>> {
        // LIMIT NULL means no limit
        let limit = filter.limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX));

        let rows = sqlx::query_as::<_, ArtworkRow>(&format!(
            r#"
            SELECT {ARTWORK_COLUMNS}
            FROM artworks
            WHERE (NOT $1 OR featured)
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#
        ))
        .bind(filter.featured_only)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ArtworkRow::into_artwork).collect()
    }

    async fn find_by_id(&self, id: &ArtworkId) -> ArtworkResult<Option<Artwork>> {
        let row = sqlx::query_as::<_, ArtworkRow>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ArtworkRow::into_artwork).transpose()
    }

    async fn slug_exists(&self, slug: &Slug) -> ArtworkResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM artworks WHERE slug = $1)",
        )
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, artwork: &Artwork) -> ArtworkResult<Artwork> {
        let row = sqlx::query_as::<_, ArtworkRow>(&format!(
            r#"
            INSERT INTO artworks (
                id,
                title,
                description,
                images,
                status,
                slug,
                featured,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {ARTWORK_COLUMNS}
            "#
        ))
        .bind(artwork.id.as_uuid())
        .bind(&artwork.title)
        .bind(&artwork.description)
        .bind(&artwork.images)
        .bind(artwork.status.as_str())
        .bind(artwork.slug.as_str())
        .bind(artwork.featured)
        .bind(artwork.created_at)
        .bind(artwork.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.into_artwork()
    }

    async fn update(
        &self,
        id: &ArtworkId,
        patch: &ArtworkPatch,
    ) -> ArtworkResult<Option<Artwork>> {
        let row = sqlx::query_as::<_, ArtworkRow>(&format!(
            r#"
            UPDATE artworks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                images = COALESCE($4, images),
                status = COALESCE($5, status),
                featured = COALESCE($6, featured),
                slug = COALESCE($7, slug),
                updated_at = now()
            WHERE id = $1
            RETURNING {ARTWORK_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.images.as_ref())
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.featured)
        .bind(patch.slug.as_ref().map(Slug::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(ArtworkRow::into_artwork).transpose()
    }

    async fn delete(&self, id: &ArtworkId) -> ArtworkResult<bool> {
        let deleted = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ArtworkRow {
    id: Uuid,
    title: String,
    description: String,
    images: Vec<String>,
    status: String,
    slug: String,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ArtworkRow {
    fn into_artwork(self) -> ArtworkResult<Artwork> {
        let status = self
            .status
            .parse::<ArtworkStatus>()
            .map_err(|e| ArtworkError::Internal(format!("Stored artwork {}: {}", self.id, e)))?;

        Ok(Artwork {
            id: ArtworkId::from_uuid(self.id),
            title: self.title,
            description: self.description,
            images: self.images,
            status,
            slug: Slug::from_db(self.slug),
            featured: self.featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
