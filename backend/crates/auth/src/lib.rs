//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, access gate
//!
//! ## Features
//! - Administrator login with email + password
//! - Stateless HS256 session tokens in an HTTP-only cookie
//! - Two-tier access gate: cookie presence at the perimeter, token
//!   verification in extractors
//! - Administrator bootstrap from deployment configuration
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Unknown email and wrong password are indistinguishable to the caller
//! - Tokens expire after a fixed TTL; there is no server-side revocation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{SessionClaims, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAdminRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryAdminRepository;
    pub use crate::infra::postgres::PgAdminRepository as AdminStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
