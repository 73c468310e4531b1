//! Department taxonomy service.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use docustore_core::error::AppError;
use docustore_core::result::AppResult;
use docustore_database::repositories::department::DepartmentRepository;
use docustore_entity::department::model::{CreateDepartment, Department};

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentListing {
    pub departments: Vec<Department>,
    pub total_departments: i64,
}

#[derive(Clone)]
pub struct DepartmentService {
    departments: Arc<DepartmentRepository>,
}

impl std::fmt::Debug for DepartmentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepartmentService").finish()
    }
}

impl DepartmentService {
    pub fn new(departments: Arc<DepartmentRepository>) -> Self {
        Self { departments }
    }

    /// List all departments alphabetically.
    pub async fn list(&self) -> AppResult<DepartmentListing> {
        let departments = self.departments.find_all().await?;
        let total_departments = departments.len() as i64;
        Ok(DepartmentListing {
            departments,
            total_departments,
        })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Department> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))
    }

    pub async fn create(&self, name: &str, description: Option<String>) -> AppResult<Department> {
        let input = validated(name, description)?;
        let department = self.departments.create(&input).await?;
        info!(department_id = %department.id, "Department created");
        Ok(department)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<String>,
    ) -> AppResult<Department> {
        let input = validated(name, description)?;
        self.departments.update(id, &input).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.departments.delete(id).await? {
            return Err(AppError::not_found("Department not found"));
        }
        info!(department_id = %id, "Department deleted");
        Ok(())
    }
}

fn validated(name: &str, description: Option<String>) -> AppResult<CreateDepartment> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    Ok(CreateDepartment {
        name: name.to_string(),
        description,
    })
}
