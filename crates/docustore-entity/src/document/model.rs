//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A managed document record.
///
/// `file_path` is an opaque location string recorded by the user; it is
/// not validated or resolved against any storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Opaque location string.
    pub file_path: Option<String>,
    /// Optional category reference.
    pub category_id: Option<Uuid>,
    /// The user who created the document. Never reassigned.
    pub owner_id: Option<Uuid>,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
}

/// A document row joined with its category name for list views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentWithCategory {
    /// Unique document identifier.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Opaque location string.
    pub file_path: Option<String>,
    /// Joined category name (None renders as "Uncategorized").
    pub category_name: Option<String>,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Document title (required non-empty).
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Opaque location string.
    pub file_path: Option<String>,
    /// Optional category reference.
    pub category_id: Option<Uuid>,
    /// The creating session's user.
    pub owner_id: Option<Uuid>,
}

/// Full overwrite of a document's editable fields.
///
/// Owner and creation time are never touched by updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title (required non-empty).
    pub title: String,
    /// New description.
    pub description: Option<String>,
    /// New location string.
    pub file_path: Option<String>,
    /// New category reference.
    pub category_id: Option<Uuid>,
}
