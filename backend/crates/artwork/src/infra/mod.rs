//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryArtworkRepository;
pub use postgres::PgArtworkRepository;
