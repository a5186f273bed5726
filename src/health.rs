use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Postgres};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    /// Whether the in-process refresh schedule is enabled.
    pub scheduler_enabled: bool,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let scheduler_enabled = state.config.scheduler_enabled();

    match ping(&state.db_pool).await {
        Ok(()) => {
            debug!("health check passed");
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "OK".to_string(),
                    database: "healthy".to_string(),
                    scheduler_enabled,
                }),
            )
        }
        Err(e) => {
            error!("database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "DEGRADED".to_string(),
                    database: "unreachable".to_string(),
                    scheduler_enabled,
                }),
            )
        }
    }
}

async fn ping(pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
