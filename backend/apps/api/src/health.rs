//! Health Check

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub database: &'static str,
}

/// GET /api/health
///
/// 503 when the database cannot be reached.
pub async fn health(State(pool): State<PgPool>) -> AppResult<Json<HealthResponse>> {
    sqlx::query("SELECT 1").execute(&pool).await.map_err(|e| {
        tracing::warn!(error = %e, "Health check failed");
        AppError::service_unavailable("Database unavailable").with_source(e)
    })?;

    Ok(Json(HealthResponse {
        ok: true,
        database: "connected",
    }))
}

pub fn health_router(pool: PgPool) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .with_state(pool)
}
