//! Reports, per-user dashboard, and activity handlers.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use docustore_service::report::ReportSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /reports
pub async fn reports(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<ReportSummary>>, ApiError> {
    let summary = state.report_service.summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /my-dashboard
pub async fn my_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let (documents, stats) = state
        .document_service
        .list_for_owner(auth.context())
        .await?;
    Ok(Json(json!({
        "success": true,
        "data": { "documents": documents, "stats": stats },
    })))
}

/// GET /activity
pub async fn activity(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let recent = state.report_service.recent_activity().await?;
    Ok(Json(json!({
        "success": true,
        "data": { "recent_documents": recent },
    })))
}
