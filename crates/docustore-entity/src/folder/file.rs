//! Uploaded file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file uploaded into a folder.
///
/// `filename` is the sanitized original name shown to clients on
/// download; `stored_path` (`<folder_id>/<stored name>`) is the only
/// value ever used for on-disk lookups and always resolves under the
/// upload root.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FolderFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// The folder containing this file.
    pub folder_id: Uuid,
    /// User-supplied title.
    pub title: String,
    /// Sanitized original filename (client-facing download name).
    pub filename: String,
    /// Relative storage path under the upload root.
    pub stored_path: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// Data required to record a newly uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderFile {
    /// Target folder.
    pub folder_id: Uuid,
    /// User-supplied title.
    pub title: String,
    /// Sanitized original filename.
    pub filename: String,
    /// Relative storage path under the upload root.
    pub stored_path: String,
}
