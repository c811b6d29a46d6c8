//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;
mod health;

use std::sync::Arc;

use artwork::PgArtworkRepository;
use auth::application::BootstrapAdminUseCase;
use auth::{AuthConfig, PgAdminRepository, TokenService};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{AppParts, build_router};
use crate::config::ServerConfig;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,artwork=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let auth_config = AuthConfig::from_env()?;
    let tokens = Arc::new(TokenService::new(&auth_config)?);

    // Lazy pool: connections are opened on first use
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.database_url)?;

    // Errors here should not prevent server startup; /api/health reports
    // the database state
    match sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
    {
        Ok(()) => tracing::info!("Migrations completed"),
        Err(e) => tracing::warn!(error = %e, "Migrations failed, continuing anyway"),
    }

    let admins = PgAdminRepository::new(pool.clone());
    let artworks = PgArtworkRepository::new(pool.clone());

    if let Some(admin) = config.bootstrap_admin {
        let use_case = BootstrapAdminUseCase::new(Arc::new(admins.clone()));
        if let Err(e) = use_case.execute(&admin.email, admin.password).await {
            tracing::warn!(
                error = %e,
                email = %admin.email,
                "Admin bootstrap failed, continuing anyway"
            );
        }
    }

    let app = build_router(
        AppParts {
            admins,
            artworks,
            tokens,
            pool,
        },
        config.frontend_origins,
    );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
