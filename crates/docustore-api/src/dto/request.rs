//! Request DTOs.

use serde::Deserialize;
use uuid::Uuid;

use docustore_core::error::AppError;
use docustore_core::result::AppResult;

/// Signup request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Document create/edit payload.
///
/// `category_id` arrives as a string to match the form semantics of the
/// original screens: an empty string means "no category".
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

impl DocumentPayload {
    /// Normalize the category field: empty or missing becomes `None`,
    /// anything else must parse as a UUID.
    pub fn category_uuid(&self) -> AppResult<Option<Uuid>> {
        match self.category_id.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<Uuid>()
                .map(Some)
                .map_err(|_| AppError::validation("Invalid category_id")),
        }
    }
}

/// Category or department create/edit payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// User create/edit payload. Role arrives as a string ("admin"/"user").
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Folder creation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_normalizes_to_none() {
        let payload = DocumentPayload {
            title: "t".into(),
            description: None,
            file_path: None,
            category_id: Some(String::new()),
        };
        assert_eq!(payload.category_uuid().unwrap(), None);
    }

    #[test]
    fn test_bad_category_rejected() {
        let payload = DocumentPayload {
            title: "t".into(),
            description: None,
            file_path: None,
            category_id: Some("not-a-uuid".into()),
        };
        assert!(payload.category_uuid().is_err());
    }
}
