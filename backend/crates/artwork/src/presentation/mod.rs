//! Presentation Layer
//!
//! HTTP handlers, DTOs, pages, and router.

pub mod dto;
pub mod handlers;
pub mod pages;
pub mod router;

pub use handlers::ArtworkAppState;
pub use router::{admin_pages_router, artwork_router};
