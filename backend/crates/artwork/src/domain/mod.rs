//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Artwork, ArtworkDraft, ArtworkPatch, ArtworkFilter)
//! - Domain value objects (ArtworkStatus, Slug)
//! - Domain services (slug candidates)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entities::{Artwork, ArtworkDraft, ArtworkFilter, ArtworkPatch};
pub use repository::ArtworkRepository;
pub use value_objects::{ArtworkStatus, Slug};
