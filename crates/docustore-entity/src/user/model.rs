//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, used for login).
    pub email: String,
    /// User role.
    pub role: UserRole,
    /// Argon2 password hash. Admin-provisioned accounts may have none
    /// until a password is set, and cannot log in.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the account has credentials and can log in.
    pub fn can_login(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
    /// Pre-hashed password (None for admin-provisioned accounts).
    pub password_hash: Option<String>,
}

/// Data for a full overwrite of an existing user's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: String,
    /// New email address.
    pub email: String,
    /// New role.
    pub role: UserRole,
}
