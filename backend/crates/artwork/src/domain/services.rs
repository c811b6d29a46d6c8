//! Domain Services
//!
//! Slug candidate generation.

use super::value_objects::Slug;

/// Upper bound on slug candidates tried for one artwork
pub const MAX_SLUG_ATTEMPTS: u32 = 1000;

/// `base`, `base-1`, `base-2`, … up to `max_attempts` candidates.
pub fn slug_candidates(base: &Slug, max_attempts: u32) -> impl Iterator<Item = Slug> + '_ {
    (0..max_attempts).map(move |n| base.with_suffix(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_candidates_order() {
        let base = Slug::from_title("Blue Horizon");
        let candidates: Vec<String> = slug_candidates(&base, 3)
            .map(|s| s.as_str().to_string())
            .collect();
        assert_eq!(
            candidates,
            vec!["blue-horizon", "blue-horizon-1", "blue-horizon-2"]
        );
    }

    #[test]
    fn test_slug_candidates_bounded() {
        let base = Slug::from_title("x");
        assert_eq!(slug_candidates(&base, MAX_SLUG_ATTEMPTS).count(), 1000);
        assert_eq!(slug_candidates(&base, 0).count(), 0);
    }
}
