//! Category taxonomy handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use uuid::Uuid;

use docustore_entity::category::model::Category;
use docustore_service::category::CategoryListing;

use crate::dto::request::TaxonomyPayload;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /categories
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<CategoryListing>>, ApiError> {
    let listing = state.category_service.list().await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// GET /categories/create
pub async fn create_form(_auth: AuthUser) -> Json<Value> {
    Json(json!({ "page": "category_create" }))
}

/// POST /categories/create
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<TaxonomyPayload>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state
        .category_service
        .create(&payload.name, payload.description)
        .await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// GET /categories/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.category_service.get(id).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// POST /categories/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaxonomyPayload>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state
        .category_service
        .update(id, &payload.name, payload.description)
        .await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// POST /categories/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.category_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Category deleted"))))
}
