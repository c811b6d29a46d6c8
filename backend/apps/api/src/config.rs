//! Server Configuration
//!
//! Process-level settings. Auth settings live in `auth::AuthConfig`.

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";

/// Administrator to upsert at startup
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// CORS allow-list; unparsable entries are skipped
    pub frontend_origins: Vec<HeaderValue>,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url =
            non_empty("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = non_empty("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:3000")?;

        let frontend_origins = non_empty("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| origin.parse().ok())
            .collect();

        let bootstrap_admin = match (non_empty("ADMIN_EMAIL"), non_empty("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("Only one of ADMIN_EMAIL / ADMIN_PASSWORD is set, skipping bootstrap");
                None
            }
            (None, None) => None,
        };

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            bootstrap_admin,
        })
    }
}
