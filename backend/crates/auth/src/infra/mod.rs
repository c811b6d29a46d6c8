//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAdminRepository;
pub use postgres::PgAdminRepository;
