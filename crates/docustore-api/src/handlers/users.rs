//! User account handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use uuid::Uuid;

use docustore_entity::user::UserRole;
use docustore_service::user::UserListing;

use crate::dto::request::UserPayload;
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /users
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let UserListing { users, stats } = state.user_service.list().await?;
    let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(json!({
        "success": true,
        "data": { "users": users, "stats": stats },
    })))
}

/// GET /users/create
///
/// Returns the role choices for the create form.
pub async fn create_form(_auth: AuthUser) -> Json<Value> {
    Json(json!({ "page": "user_create", "roles": ["admin", "user"] }))
}

/// POST /users/create
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<UserPayload>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let role: UserRole = payload.role.parse().map_err(ApiError::from)?;
    let user = state
        .user_service
        .create(&payload.name, &payload.email, role)
        .await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// GET /users/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// POST /users/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let role: UserRole = payload.role.parse().map_err(ApiError::from)?;
    let user = state
        .user_service
        .update(id, &payload.name, &payload.email, role)
        .await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// POST /users/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.user_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("User deleted"))))
}
