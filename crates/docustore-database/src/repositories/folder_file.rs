//! Folder file repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docustore_core::error::{AppError, ErrorKind};
use docustore_core::result::AppResult;
use docustore_entity::folder::file::{CreateFolderFile, FolderFile};

#[derive(Debug, Clone)]
pub struct FolderFileRepository {
    pool: PgPool,
}

impl FolderFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FolderFile>> {
        sqlx::query_as::<_, FolderFile>("SELECT * FROM folder_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// List files in a folder, newest upload first.
    pub async fn find_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<FolderFile>> {
        sqlx::query_as::<_, FolderFile>(
            "SELECT * FROM folder_files WHERE folder_id = $1 ORDER BY uploaded_at DESC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folder files", e))
    }

    /// Check whether a stored path is already taken within a folder.
    pub async fn exists_stored_path(&self, folder_id: Uuid, stored_path: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM folder_files WHERE folder_id = $1 AND stored_path = $2)",
        )
        .bind(folder_id)
        .bind(stored_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check stored path", e))
    }

    pub async fn create(&self, data: &CreateFolderFile) -> AppResult<FolderFile> {
        sqlx::query_as::<_, FolderFile>(
            "INSERT INTO folder_files (folder_id, title, filename, stored_path) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.folder_id)
        .bind(&data.title)
        .bind(&data.filename)
        .bind(&data.stored_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folder_files_folder_id_stored_path_key") =>
            {
                AppError::conflict("A file with this name already exists in the folder")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to record file", e),
        })
    }
}
