//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An authenticated session backing an issued token.
///
/// A session is live while it is neither revoked nor past its absolute
/// expiry; token validation checks the row on every gated request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (embedded in the token).
    pub id: Uuid,
    /// The authenticated user.
    pub user_id: Uuid,
    /// Absolute expiry time.
    pub expires_at: DateTime<Utc>,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
    /// Set on explicit logout.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check whether the session is still usable.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_in: Duration, revoked: bool) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            expires_at: now + expires_in,
            created_at: now,
            revoked_at: revoked.then_some(now),
        }
    }

    #[test]
    fn test_live_session() {
        assert!(session(Duration::hours(1), false).is_live(Utc::now()));
    }

    #[test]
    fn test_expired_session() {
        assert!(!session(Duration::seconds(-1), false).is_live(Utc::now()));
    }

    #[test]
    fn test_revoked_session() {
        assert!(!session(Duration::hours(1), true).is_live(Utc::now()));
    }
}
