//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An organizational department. Reference data only — nothing else
/// links to departments in this version.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create or overwrite a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    /// Department name (required non-empty).
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
}
