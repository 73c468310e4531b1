//! Session gate handlers: signup, login, logout.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /signup
pub async fn signup_form() -> Json<Value> {
    Json(json!({
        "page": "signup",
        "fields": ["name", "email", "password"],
    }))
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .session_manager
        .signup(&req.name, &req.email, &req.password)
        .await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// GET /login
pub async fn login_form() -> Json<Value> {
    Json(json!({
        "page": "login",
        "fields": ["email", "password"],
    }))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let outcome = state.session_manager.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: outcome.access_token,
        expires_at: outcome.expires_at,
        user: UserResponse::from(&outcome.user),
    })))
}

/// GET /logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.logout(auth.session_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Logged out successfully",
    ))))
}
