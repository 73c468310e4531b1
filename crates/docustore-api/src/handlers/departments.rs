//! Department taxonomy handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use uuid::Uuid;

use docustore_entity::department::model::Department;
use docustore_service::department::DepartmentListing;

use crate::dto::request::TaxonomyPayload;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /departments
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<DepartmentListing>>, ApiError> {
    let listing = state.department_service.list().await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// GET /departments/create
pub async fn create_form(_auth: AuthUser) -> Json<Value> {
    Json(json!({ "page": "department_create" }))
}

/// POST /departments/create
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<TaxonomyPayload>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state
        .department_service
        .create(&payload.name, payload.description)
        .await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// GET /departments/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state.department_service.get(id).await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// POST /departments/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaxonomyPayload>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state
        .department_service
        .update(id, &payload.name, payload.description)
        .await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// POST /departments/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.department_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Department deleted",
    ))))
}
