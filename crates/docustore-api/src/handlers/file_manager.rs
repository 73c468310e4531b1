//! Folder hierarchy and file store handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use uuid::Uuid;

use docustore_core::error::AppError;
use docustore_entity::folder::file::FolderFile;
use docustore_entity::folder::model::Folder;
use docustore_service::folder::{FolderView, UploadParams};

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /file-manager
pub async fn root(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let folders = state.folder_service.list_roots().await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// GET /file-manager/folder/{id}
pub async fn browse(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderView>>, ApiError> {
    let view = state.folder_service.browse(id).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// POST /file-manager/folders/create
pub async fn create_folder(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder = state
        .folder_service
        .create_folder(&req.name, req.parent_id)
        .await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// POST /file-manager/folder/{id}/upload
///
/// Multipart form with a `title` text field and a `file` part.
pub async fn upload(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<FolderFile>>, ApiError> {
    let mut title: Option<String> = None;
    let mut filename: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("title") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid title field: {e}")))?;
                title = Some(text);
            }
            Some("file") => {
                filename = field.file_name().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file part: {e}")))?;
                data = Some(bytes);
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::validation("Title is required"))?;
    let filename = filename.ok_or_else(|| AppError::validation("A file is required"))?;
    let data = data.ok_or_else(|| AppError::validation("A file is required"))?;

    let file = state
        .folder_service
        .upload(UploadParams {
            folder_id: id,
            title,
            filename,
            data,
        })
        .await?;

    Ok(Json(ApiResponse::ok(file)))
}

/// GET /file-manager/files/{id}/download
pub async fn download(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (file, stream) = state.folder_service.download(id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
