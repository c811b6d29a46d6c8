//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod create_artwork;
pub mod delete_artwork;
pub mod query_artworks;
pub mod update_artwork;

pub use create_artwork::{CreateArtworkInput, CreateArtworkUseCase};
pub use delete_artwork::DeleteArtworkUseCase;
pub use query_artworks::QueryArtworksUseCase;
pub use update_artwork::{UpdateArtworkInput, UpdateArtworkUseCase};
