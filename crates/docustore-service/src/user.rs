//! User account management service.
//!
//! Accounts created here are admin-provisioned: they carry no password
//! hash and cannot log in until credentials are set. Self-service
//! registration goes through the session manager instead.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use docustore_core::error::AppError;
use docustore_core::result::AppResult;
use docustore_database::repositories::user::UserRepository;
use docustore_entity::user::model::{CreateUser, UpdateUser, User};
use docustore_entity::user::UserRole;

/// Summary stats shown alongside the user listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserListStats {
    pub total_users: i64,
    pub admin_users: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserListing {
    pub users: Vec<User>,
    pub stats: UserListStats,
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// List all users, oldest first, with admin counts.
    pub async fn list(&self) -> AppResult<UserListing> {
        let users = self.users.find_all().await?;
        let admin_users = users.iter().filter(|u| u.role.is_admin()).count() as i64;
        let stats = UserListStats {
            total_users: users.len() as i64,
            admin_users,
        };
        Ok(UserListing { users, stats })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Provision a new account without credentials.
    pub async fn create(&self, name: &str, email: &str, role: UserRole) -> AppResult<User> {
        let (name, email) = validated(name, email)?;
        let user = self
            .users
            .create(&CreateUser {
                name,
                email,
                role,
                password_hash: None,
            })
            .await?;
        info!(user_id = %user.id, "User provisioned");
        Ok(user)
    }

    /// Full overwrite of name, email, and role.
    pub async fn update(&self, id: Uuid, name: &str, email: &str, role: UserRole) -> AppResult<User> {
        let (name, email) = validated(name, email)?;
        self.users.update(id, &UpdateUser { name, email, role }).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.users.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}

fn validated(name: &str, email: &str) -> AppResult<(String, String)> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(AppError::validation("Name, email and role are required"));
    }
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email address"));
    }
    Ok((name.to_string(), email.to_string()))
}
