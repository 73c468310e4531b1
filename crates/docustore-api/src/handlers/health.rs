//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "ok",
        Err(_) => "unreachable",
    };
    let storage = match state.storage.health_check().await {
        Ok(true) => "ok",
        _ => "unreachable",
    };

    let status = if database == "ok" && storage == "ok" {
        "healthy"
    } else {
        "degraded"
    };

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        storage: storage.to_string(),
    })))
}
