//! Request context carrying the authenticated user and session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docustore_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by the API layer and passed into service methods so that
/// every operation knows who is acting and from which session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's role as of this request.
    pub role: UserRole,
    /// Display name (convenience field).
    pub name: String,
}

impl RequestContext {
    pub fn new(user_id: Uuid, session_id: Uuid, role: UserRole, name: String) -> Self {
        Self {
            user_id,
            session_id,
            role,
            name,
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
