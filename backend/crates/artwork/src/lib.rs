//! Artwork Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, slug services, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, admin pages, router
//!
//! ## Rules
//! - Listing and reading are public; create, update and delete require a
//!   verified administrator session
//! - Slugs are unique. On create they are derived from the title (or taken
//!   from the request) and suffixed `-1`, `-2`, … until the store accepts one
//! - `images` is never empty and `status` is one of `for-sale`, `sold`,
//!   `not-for-sale`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ArtworkError, ArtworkResult};
pub use infra::postgres::PgArtworkRepository;
pub use presentation::router::{admin_pages_router, artwork_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryArtworkRepository;
    pub use crate::infra::postgres::PgArtworkRepository as ArtworkStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
