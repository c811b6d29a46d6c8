//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::{AuthAppState, login_page};
pub use middleware::{
    AdminPage, AdminSession, LOGIN_PATH, SessionCookieGate, is_gated_path, require_session_cookie,
};
pub use router::auth_router;
