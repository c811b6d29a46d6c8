//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request. Missing fields deserialize as empty and are rejected by
/// the handler with a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Common
// ============================================================================

/// `{ ok, message }` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub ok: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}
