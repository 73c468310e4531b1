//! Document store handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use uuid::Uuid;

use docustore_entity::document::model::Document;
use docustore_service::document::{DocumentInput, DocumentListing};

use crate::dto::request::DocumentPayload;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /documents
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<DocumentListing>>, ApiError> {
    let listing = state.document_service.list().await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// GET /documents/create
///
/// Returns the category choices for the create form.
pub async fn create_form(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let listing = state.document_service.list().await?;
    Ok(Json(json!({
        "page": "document_create",
        "categories": listing.categories,
    })))
}

/// POST /documents/create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<DocumentPayload>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let input = to_input(&payload)?;
    let document = state.document_service.create(auth.context(), input).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// GET /documents/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let (document, categories) = state.document_service.get_with_choices(id).await?;
    Ok(Json(json!({
        "page": "document_edit",
        "document": document,
        "categories": categories,
    })))
}

/// POST /documents/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<DocumentPayload>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let input = to_input(&payload)?;
    let document = state.document_service.update(id, input).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// POST /documents/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.document_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Document deleted"))))
}

fn to_input(payload: &DocumentPayload) -> Result<DocumentInput, ApiError> {
    Ok(DocumentInput {
        title: payload.title.clone(),
        description: payload.description.clone(),
        file_path: payload.file_path.clone(),
        category_id: payload.category_uuid()?,
    })
}
