//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{CreateArtworkInput, UpdateArtworkInput};
use crate::domain::entities::Artwork;

// ============================================================================
// Artwork
// ============================================================================

/// Artwork as exposed over HTTP
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub status: &'static str,
    pub slug: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Artwork> for ArtworkDto {
    fn from(artwork: Artwork) -> Self {
        Self {
            id: artwork.id.to_string(),
            title: artwork.title,
            description: artwork.description,
            images: artwork.images,
            status: artwork.status.as_str(),
            slug: artwork.slug.as_str().to_string(),
            featured: artwork.featured,
            created_at: artwork.created_at,
            updated_at: artwork.updated_at,
        }
    }
}

/// `{ ok, artworks }`
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkListResponse {
    pub ok: bool,
    pub artworks: Vec<ArtworkDto>,
}

impl ArtworkListResponse {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self {
            ok: true,
            artworks: artworks.into_iter().map(ArtworkDto::from).collect(),
        }
    }
}

/// `{ ok, artwork }`
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkResponse {
    pub ok: bool,
    pub artwork: ArtworkDto,
}

impl ArtworkResponse {
    pub fn new(artwork: Artwork) -> Self {
        Self {
            ok: true,
            artwork: artwork.into(),
        }
    }
}

/// `{ ok, message }`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub ok: bool,
    pub message: String,
}

// ============================================================================
// Requests
// ============================================================================

/// Query string for the public listing. Kept as raw strings so odd values
/// are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListArtworksQuery {
    pub limit: Option<String>,
    pub featured: Option<String>,
}

/// Create request. Every field is optional at the wire level; the use case
/// decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArtworkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
}

impl From<CreateArtworkRequest> for CreateArtworkInput {
    fn from(req: CreateArtworkRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            images: req.images,
            status: req.status,
            slug: req.slug,
            featured: req.featured,
        }
    }
}

/// Partial update. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArtworkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub slug: Option<String>,
}

impl From<UpdateArtworkRequest> for UpdateArtworkInput {
    fn from(req: UpdateArtworkRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            images: req.images,
            status: req.status,
            featured: req.featured,
            slug: req.slug,
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAdmin {
    pub admin_id: String,
    pub email: String,
}

/// Payload of the admin dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub ok: bool,
    pub admin: DashboardAdmin,
    pub artworks: Vec<ArtworkDto>,
}
