//! Password Hashing and Verification
//!
//! Administrator passwords are stored as Argon2id PHC strings.
//!
//! Two ways into [`ClearTextPassword`]:
//! - [`ClearTextPassword::new`] enforces the password policy and is used when
//!   a password is being *set* (admin bootstrap).
//! - [`ClearTextPassword::for_verification`] only normalizes and is used at
//!   login, so that a policy change never locks out an existing account and
//!   the login path cannot leak which rule a guess violated.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, erased from memory on drop.
///
/// Not `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate a new password against the policy.
    ///
    /// Unicode is NFKC-normalized first; length counts code points.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::for_verification(raw);
        let normalized = password.0.as_str();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_common_pattern(normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(password)
    }

    /// Wrap a submitted password for comparison against a stored hash.
    pub fn for_verification(mut raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Vec<u8> {
        let mut bytes = self.0.as_bytes().to_vec();
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash the password with Argon2id and a fresh 128-bit salt.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let mut bytes = self.peppered(pepper);
        let salt = SaltString::generate(OsRng);

        // OWASP defaults: m=19456 (19 MiB), t=2, p=1
        let result = Argon2::default()
            .hash_password(&bytes, &salt)
            .map(|hash| HashedPassword {
                hash: hash.to_string(),
            })
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()));

        bytes.zeroize();
        result
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format (algorithm, params, salt, digest).
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Wrap a stored hash without parsing it.
    ///
    /// Rows written by other tools may carry hashes Argon2 cannot read;
    /// those load fine and [`HashedPassword::verify`] rejects every password.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Whether the stored string is a PHC hash Argon2 can read
    pub fn is_well_formed(&self) -> bool {
        PasswordHash::new(&self.hash).is_ok()
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    ///
    /// Argon2 compares digests in constant time. An unparsable stored hash
    /// verifies nothing.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        let mut bytes = password.peppered(pepper);
        let valid = Argon2::default()
            .verify_password(&bytes, &parsed_hash)
            .is_ok();
        bytes.zeroize();
        valid
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "password123",
    "abcdefgh",
    "letmein1",
    "welcome1",
    "admin123",
    "administrator",
    "iloveyou",
    "artblog123",
];

const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "qazwsx", "1qaz2wsx"];

fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    is_sequential_numbers(&lower)
        || KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p))
        || COMMON_PASSWORDS.contains(&lower.as_str())
}

/// "12345678", "87654321" and friends
fn is_sequential_numbers(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < 4 || digits.len() != s.chars().count() {
        return false;
    }

    let ascending = digits.windows(2).all(|w| (w[0] + 1) % 10 == w[1]);
    let descending = digits.windows(2).all(|w| (w[1] + 1) % 10 == w[0]);
    ascending || descending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_password_too_long() {
        let result = ClearTextPassword::new("ab".repeat(MAX_PASSWORD_LENGTH));
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("Gallery\u{0007}Opening".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_password_common_pattern() {
        for weak in ["password123", "qwertyuiop", "12345678", "98765432", "zzzzzzzzzz"] {
            let result = ClearTextPassword::new(weak.to_string());
            assert!(
                matches!(result, Err(PasswordPolicyError::CommonPattern)),
                "{weak} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_password() {
        assert!(ClearTextPassword::new("Cobalt-Skies-1987".to_string()).is_ok());
        assert!(ClearTextPassword::new("パスワード安全です!".to_string()).is_ok());
    }

    #[test]
    fn test_for_verification_skips_policy() {
        // Too short for the policy, but login must still be able to check it
        let password = ClearTextPassword::for_verification("abc".to_string());
        let hashed = password.hash(None).unwrap();
        assert!(hashed.verify(&ClearTextPassword::for_verification("abc".to_string()), None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("Cobalt-Skies-1987".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();
        assert!(hashed.as_phc_string().starts_with("$argon2id$"));

        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::for_verification("Cobalt-Skies-1988".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_nfkc_normalization_on_verify() {
        // Fullwidth digits normalize to ASCII digits
        let stored = ClearTextPassword::for_verification("gallery123".to_string())
            .hash(None)
            .unwrap();
        let submitted = ClearTextPassword::for_verification("gallery１２３".to_string());
        assert!(stored.verify(&submitted, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::for_verification("Cobalt-Skies-1987".to_string());
        let hashed = password.hash(Some(b"pepper")).unwrap();

        assert!(hashed.verify(&password, Some(b"pepper")));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"salt")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::for_verification("Cobalt-Skies-1987".to_string());
        let hashed = password.hash(None).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_foreign_stored_hash_verifies_nothing() {
        let bcrypt = "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
        let stored = HashedPassword::from_stored(bcrypt);

        assert!(!stored.is_well_formed());
        assert_eq!(stored.as_phc_string(), bcrypt);
        let password = ClearTextPassword::for_verification("Cobalt-Skies-1987".to_string());
        assert!(!stored.verify(&password, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::for_verification("secret-value".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));
    }
}
