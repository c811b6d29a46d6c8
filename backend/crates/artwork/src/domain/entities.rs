//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::ArtworkId;

use super::value_objects::{ArtworkStatus, Slug};

/// An artwork in the portfolio
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    /// Image URLs in display order; never empty
    pub images: Vec<String>,
    pub status: ArtworkStatus,
    pub slug: Slug,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artwork {
    pub fn new(draft: ArtworkDraft, slug: Slug) -> Self {
        let now = Utc::now();
        Self {
            id: ArtworkId::new(),
            title: draft.title,
            description: draft.description,
            images: draft.images,
            status: draft.status,
            slug,
            featured: draft.featured,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the fields present in `patch` and bump `updated_at`.
    pub fn apply(&mut self, patch: &ArtworkPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(images) = &patch.images {
            self.images = images.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(slug) = &patch.slug {
            self.slug = slug.clone();
        }
        self.updated_at = Utc::now();
    }
}

/// Validated fields of an artwork about to be created. The slug is
/// assigned separately.
#[derive(Debug, Clone)]
pub struct ArtworkDraft {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub status: ArtworkStatus,
    pub featured: bool,
}

/// Validated partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ArtworkPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: Option<ArtworkStatus>,
    pub featured: Option<bool>,
    pub slug: Option<Slug>,
}

/// Listing filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtworkFilter {
    pub featured_only: bool,
    pub limit: Option<u64>,
}

impl ArtworkFilter {
    /// Build from raw query values. Only the exact string `"true"` selects
    /// featured artworks; `limit` must start with a positive integer,
    /// anything else means no limit.
    pub fn from_query(featured: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            featured_only: featured == Some("true"),
            limit: limit.and_then(parse_limit),
        }
    }
}

/// Leading-integer parse: `"8"`, `" 8"`, `"8px"` and `"2.5"` all give a
/// number; `"abc"`, `"0"` and `"-3"` do not.
fn parse_limit(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse::<u64>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ArtworkDraft {
        ArtworkDraft {
            title: "Blue Horizon".to_string(),
            description: "Oil on canvas".to_string(),
            images: vec!["https://cdn.example.com/blue.jpg".to_string()],
            status: ArtworkStatus::ForSale,
            featured: false,
        }
    }

    #[test]
    fn test_new_artwork_timestamps() {
        let artwork = Artwork::new(draft(), Slug::from_title("Blue Horizon"));
        assert_eq!(artwork.created_at, artwork.updated_at);
        assert_eq!(artwork.slug.as_str(), "blue-horizon");
    }

    #[test]
    fn test_apply_patch_touches_only_given_fields() {
        let mut artwork = Artwork::new(draft(), Slug::from_title("Blue Horizon"));
        let before = artwork.clone();

        artwork.apply(&ArtworkPatch {
            status: Some(ArtworkStatus::Sold),
            ..Default::default()
        });

        assert_eq!(artwork.status, ArtworkStatus::Sold);
        assert_eq!(artwork.title, before.title);
        assert_eq!(artwork.description, before.description);
        assert_eq!(artwork.images, before.images);
        assert_eq!(artwork.slug, before.slug);
        assert_eq!(artwork.featured, before.featured);
        assert_eq!(artwork.created_at, before.created_at);
        assert!(artwork.updated_at >= before.updated_at);
    }

    #[test]
    fn test_filter_from_query() {
        assert_eq!(
            ArtworkFilter::from_query(Some("true"), Some("8")),
            ArtworkFilter {
                featured_only: true,
                limit: Some(8)
            }
        );
        assert_eq!(ArtworkFilter::from_query(None, None), ArtworkFilter::default());
        assert!(!ArtworkFilter::from_query(Some("TRUE"), None).featured_only);
        assert!(!ArtworkFilter::from_query(Some("1"), None).featured_only);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("2"), Some(2));
        assert_eq!(parse_limit(" 3"), Some(3));
        assert_eq!(parse_limit("+4"), Some(4));
        assert_eq!(parse_limit("5abc"), Some(5));
        assert_eq!(parse_limit("2.5"), Some(2));
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("-3"), None);
        assert_eq!(parse_limit("abc"), None);
        assert_eq!(parse_limit(""), None);
    }
}
