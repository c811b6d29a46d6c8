//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `artwork` crates:
//! - The unified [`error::app_error::AppError`] and its HTTP mapping
//! - Typed identifiers for administrators and artworks
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    #[cfg(feature = "axum")]
    pub mod conversions;
    pub mod kind;
}
pub mod id;
