//! Domain Value Objects
//!
//! Immutable value types for the Artwork domain.

use std::fmt;
use std::str::FromStr;

/// Sale status of an artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArtworkStatus {
    #[default]
    ForSale,
    Sold,
    NotForSale,
}

impl ArtworkStatus {
    pub const ALL: [ArtworkStatus; 3] = [
        ArtworkStatus::ForSale,
        ArtworkStatus::Sold,
        ArtworkStatus::NotForSale,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkStatus::ForSale => "for-sale",
            ArtworkStatus::Sold => "sold",
            ArtworkStatus::NotForSale => "not-for-sale",
        }
    }
}

/// Unrecognized status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status must be one of for-sale, sold, not-for-sale (got {:?})",
            self.0
        )
    }
}

impl FromStr for ArtworkStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL-friendly unique handle for an artwork
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Used when a title has no word characters at all
    pub const FALLBACK: &'static str = "artwork";

    /// Derive a slug from a title: lowercase, every run of characters
    /// outside `[a-z0-9_]` becomes one hyphen, hyphens at either end are
    /// dropped.
    pub fn from_title(title: &str) -> Self {
        let mut slug = String::with_capacity(title.len());
        let mut pending_hyphen = false;

        for ch in title.to_lowercase().chars() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            } else {
                pending_hyphen = true;
            }
        }

        if slug.is_empty() {
            slug.push_str(Self::FALLBACK);
        }
        Self(slug)
    }

    /// Accept a caller-supplied slug. Surrounding whitespace is trimmed;
    /// blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    /// Restore from storage
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// `base` for `n == 0`, otherwise `base-n`
    pub fn with_suffix(&self, n: u32) -> Self {
        if n == 0 {
            self.clone()
        } else {
            Self(format!("{}-{}", self.0, n))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip_and_default() {
        for status in ArtworkStatus::ALL {
            assert_eq!(status.as_str().parse::<ArtworkStatus>(), Ok(status));
        }
        assert_eq!(ArtworkStatus::default(), ArtworkStatus::ForSale);
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("For-Sale".parse::<ArtworkStatus>().is_err());
        assert!("available".parse::<ArtworkStatus>().is_err());
        assert!("".parse::<ArtworkStatus>().is_err());
    }

    #[test]
    fn test_slug_from_title() {
        assert_eq!(Slug::from_title("Blue Horizon").as_str(), "blue-horizon");
        assert_eq!(Slug::from_title("  Blue   Horizon!! ").as_str(), "blue-horizon");
        assert_eq!(Slug::from_title("Night & Day, 1999").as_str(), "night-day-1999");
        assert_eq!(Slug::from_title("snake_case_title").as_str(), "snake_case_title");
        assert_eq!(Slug::from_title("--Edge--").as_str(), "edge");
    }

    #[test]
    fn test_slug_from_title_non_ascii_is_separator() {
        assert_eq!(Slug::from_title("Café Müller").as_str(), "caf-m-ller");
        assert_eq!(Slug::from_title("夜の海").as_str(), Slug::FALLBACK);
        assert_eq!(Slug::from_title("!!!").as_str(), Slug::FALLBACK);
    }

    #[test]
    fn test_slug_parse() {
        assert_eq!(Slug::parse("  my-slug ").unwrap().as_str(), "my-slug");
        // Caller-supplied slugs are not re-normalized
        assert_eq!(Slug::parse("Mixed Case").unwrap().as_str(), "Mixed Case");
        assert_eq!(Slug::parse("   "), None);
        assert_eq!(Slug::parse(""), None);
    }

    #[test]
    fn test_slug_with_suffix() {
        let base = Slug::from_title("Blue Horizon");
        assert_eq!(base.with_suffix(0), base);
        assert_eq!(base.with_suffix(1).as_str(), "blue-horizon-1");
        assert_eq!(base.with_suffix(12).as_str(), "blue-horizon-12");
    }
}
