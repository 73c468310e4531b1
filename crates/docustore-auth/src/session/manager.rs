//! Session lifecycle: signup, login, token validation, logout.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use docustore_core::config::{AuthConfig, SessionConfig};
use docustore_core::error::AppError;
use docustore_core::result::AppResult;
use docustore_database::repositories::session::SessionRepository;
use docustore_database::repositories::user::UserRepository;
use docustore_entity::user::model::{CreateUser, User};
use docustore_entity::user::UserRole;

use crate::jwt::decoder::JwtDecoder;
use crate::jwt::encoder::JwtEncoder;
use crate::password::hasher::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed access token carrying the session ID.
    pub access_token: String,
    /// Token expiry.
    pub expires_at: chrono::DateTime<Utc>,
}

/// The identity established for a gated request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The account row as of this request.
    pub user: User,
    /// The live session backing the token.
    pub session_id: Uuid,
}

/// Coordinates signup, login, logout, and per-request token validation.
#[derive(Debug, Clone)]
pub struct SessionManager {
    users: UserRepository,
    sessions: SessionRepository,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    password_min_length: usize,
    session_ttl_hours: i64,
}

impl SessionManager {
    pub fn new(
        users: UserRepository,
        sessions: SessionRepository,
        auth_config: &AuthConfig,
        session_config: &SessionConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(auth_config),
            decoder: JwtDecoder::new(auth_config),
            password_min_length: auth_config.password_min_length,
            session_ttl_hours: session_config.absolute_timeout_hours as i64,
        }
    }

    /// Register a new account with the default `user` role.
    ///
    /// Beyond requiring all three fields, the email must contain an `@`
    /// and the password must meet the configured minimum length.
    /// Signup does not establish a session; the caller logs in afterwards.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Name, email, and password are required"));
        }
        if !email.contains('@') {
            return Err(AppError::validation("Invalid email address"));
        }
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        // The UNIQUE constraint backstops this check under concurrency.
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                role: UserRole::User,
                password_hash: Some(password_hash),
            })
            .await?;

        info!(user_id = %user.id, "Account created");
        Ok(user)
    }

    /// Check a candidate password against an account looked up by email.
    ///
    /// Every failure mode returns the same message so the response does
    /// not reveal whether the email is registered.
    fn verify_credentials(&self, user: Option<User>, password: &str) -> AppResult<User> {
        let invalid = || AppError::authentication("Invalid email or password");

        let user = user.ok_or_else(invalid)?;

        let Some(hash) = user.password_hash.as_deref() else {
            warn!(user_id = %user.id, "Login attempt against account without credentials");
            return Err(invalid());
        };

        if !self.hasher.verify_password(password, hash)? {
            return Err(invalid());
        }

        Ok(user)
    }

    /// Authenticate credentials and open a session.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let user =
            self.verify_credentials(self.users.find_by_email(email.trim()).await?, password)?;

        let expires_at = Utc::now() + chrono::Duration::hours(self.session_ttl_hours);
        let session = self.sessions.create(user.id, expires_at).await?;
        let (access_token, expires_at) =
            self.encoder
                .generate_access_token(user.id, session.id, user.role, &user.name)?;

        info!(user_id = %user.id, session_id = %session.id, "Login succeeded");
        Ok(LoginOutcome {
            user,
            access_token,
            expires_at,
        })
    }

    /// Validate a bearer token and resolve it to a live session and user.
    pub async fn validate_token(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.decoder.decode_access_token(token)?;

        let session = self
            .sessions
            .find_by_id(claims.sid)
            .await?
            .ok_or_else(|| AppError::session("Session not found"))?;
        if !session.is_live(Utc::now()) {
            return Err(AppError::session("Session expired or revoked"));
        }

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::session("Account no longer exists"))?;

        Ok(AuthenticatedUser {
            user,
            session_id: session.id,
        })
    }

    /// Revoke a session on logout. Idempotent.
    pub async fn logout(&self, session_id: Uuid) -> AppResult<()> {
        self.sessions.revoke(session_id).await?;
        info!(session_id = %session_id, "Session revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docustore_core::error::ErrorKind;
    use sqlx::postgres::PgPoolOptions;

    // connect_lazy opens no connection until a query actually runs, so
    // the validation paths below never touch a database.
    fn test_manager() -> SessionManager {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/docustore_test")
            .unwrap();
        SessionManager::new(
            UserRepository::new(pool.clone()),
            SessionRepository::new(pool),
            &AuthConfig::default(),
            &SessionConfig::default(),
        )
    }

    fn account_with_password(password: &str) -> User {
        let hash = PasswordHasher::new().hash_password(password).unwrap();
        User {
            id: Uuid::new_v4(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: UserRole::User,
            password_hash: Some(hash),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_signup_rejects_blank_fields() {
        let manager = test_manager();
        let err = manager
            .signup("  ", "ann@example.com", "long-enough")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_signup_rejects_email_without_at_sign() {
        let manager = test_manager();
        let err = manager
            .signup("Ann", "not-an-email", "long-enough")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid email address");
    }

    #[tokio::test]
    async fn test_signup_rejects_password_below_minimum() {
        let manager = test_manager();
        let err = manager
            .signup("Ann", "ann@example.com", "seven77")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Password must be at least 8 characters");
    }

    #[tokio::test]
    async fn test_signup_accepts_password_at_minimum_length() {
        let manager = test_manager();
        // Eight characters clear every validation check; the failure then
        // comes from the unreachable pool on the email lookup.
        let err = manager
            .signup("Ann", "ann@example.com", "eight888")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_login_failures_share_one_message() {
        let manager = test_manager();

        let unknown_email = manager.verify_credentials(None, "whatever").unwrap_err();
        let wrong_password = manager
            .verify_credentials(Some(account_with_password("correct horse")), "battery staple")
            .unwrap_err();
        let no_credentials = manager
            .verify_credentials(
                Some(User {
                    password_hash: None,
                    ..account_with_password("unused")
                }),
                "anything",
            )
            .unwrap_err();

        assert_eq!(unknown_email.kind, ErrorKind::Authentication);
        assert_eq!(wrong_password.kind, ErrorKind::Authentication);
        assert_eq!(no_credentials.kind, ErrorKind::Authentication);
        assert_eq!(unknown_email.message, wrong_password.message);
        assert_eq!(unknown_email.message, no_credentials.message);
    }

    #[tokio::test]
    async fn test_matching_password_verifies() {
        let manager = test_manager();
        let user = manager
            .verify_credentials(Some(account_with_password("correct horse")), "correct horse")
            .unwrap();
        assert_eq!(user.email, "ann@example.com");
    }
}
