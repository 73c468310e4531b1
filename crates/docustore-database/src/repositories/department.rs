//! Department repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docustore_core::error::{AppError, ErrorKind};
use docustore_core::result::AppResult;
use docustore_entity::department::model::{CreateDepartment, Department};

#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find department", e))
    }

    /// List all departments in alphabetical order.
    pub async fn find_all(&self) -> AppResult<Vec<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list departments", e)
            })
    }

    pub async fn create(&self, data: &CreateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create department", e))
    }

    pub async fn update(&self, id: Uuid, data: &CreateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = $2, description = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update department", e))?
        .ok_or_else(|| AppError::not_found("Department not found"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete department", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
