//! Aggregate queries backing the reports, dashboard, and activity views.

use serde::Serialize;
use sqlx::PgPool;

use docustore_core::error::{AppError, ErrorKind};
use docustore_core::result::AppResult;
use docustore_entity::document::model::DocumentWithCategory;

/// Document count for a single category bucket.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryDocCount {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_documents(&self) -> AppResult<i64> {
        self.count_table("documents").await
    }

    pub async fn count_categories(&self) -> AppResult<i64> {
        self.count_table("categories").await
    }

    pub async fn count_departments(&self) -> AppResult<i64> {
        self.count_table("departments").await
    }

    pub async fn count_users(&self) -> AppResult<i64> {
        self.count_table("users").await
    }

    /// Document counts per category, alphabetical, including categories
    /// with no documents (their count is zero).
    pub async fn documents_by_category(&self) -> AppResult<Vec<CategoryDocCount>> {
        sqlx::query_as::<_, CategoryDocCount>(
            "SELECT COALESCE(c.name, 'Uncategorized') AS label, COUNT(d.id) AS count \
             FROM categories c \
             LEFT JOIN documents d ON d.category_id = c.id \
             GROUP BY c.id, c.name \
             ORDER BY label ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to group documents by category", e)
        })
    }

    /// Most recently created documents, capped at `limit`.
    pub async fn recent_documents(&self, limit: i64) -> AppResult<Vec<DocumentWithCategory>> {
        sqlx::query_as::<_, DocumentWithCategory>(
            "SELECT d.id, d.title, d.description, d.file_path, c.name AS category_name, \
                    d.created_at \
             FROM documents d \
             LEFT JOIN categories c ON d.category_id = c.id \
             ORDER BY d.created_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent documents", e)
        })
    }

    async fn count_table(&self, table: &str) -> AppResult<i64> {
        // Table names come from the fixed call sites above, never user input.
        let sql = format!("SELECT COUNT(*) FROM {table}");
        sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to count {table}"), e)
            })
    }
}
