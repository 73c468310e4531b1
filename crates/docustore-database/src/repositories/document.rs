//! Document repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docustore_core::error::{AppError, ErrorKind};
use docustore_core::result::AppResult;
use docustore_entity::document::model::{
    CreateDocument, Document, DocumentWithCategory, UpdateDocument,
};

#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// List all documents with their category name, newest first.
    pub async fn find_all_with_category(&self) -> AppResult<Vec<DocumentWithCategory>> {
        sqlx::query_as::<_, DocumentWithCategory>(
            "SELECT d.id, d.title, d.description, d.file_path, c.name AS category_name, \
                    d.created_at \
             FROM documents d \
             LEFT JOIN categories c ON d.category_id = c.id \
             ORDER BY d.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    /// List documents owned by a specific user, newest first.
    pub async fn find_by_owner_with_category(
        &self,
        owner_id: Uuid,
    ) -> AppResult<Vec<DocumentWithCategory>> {
        sqlx::query_as::<_, DocumentWithCategory>(
            "SELECT d.id, d.title, d.description, d.file_path, c.name AS category_name, \
                    d.created_at \
             FROM documents d \
             LEFT JOIN categories c ON d.category_id = c.id \
             WHERE d.owner_id = $1 \
             ORDER BY d.created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list documents by owner", e)
        })
    }

    pub async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (title, description, file_path, category_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.file_path)
        .bind(data.category_id)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))
    }

    /// Full overwrite of a document's editable fields.
    pub async fn update(&self, id: Uuid, data: &UpdateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents \
             SET title = $2, description = $3, file_path = $4, category_id = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.file_path)
        .bind(data.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?
        .ok_or_else(|| AppError::not_found("Document not found"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
