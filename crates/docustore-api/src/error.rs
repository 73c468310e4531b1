//! HTTP mapping for application errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use docustore_core::error::{AppError, ErrorKind};

/// Newtype around [`AppError`] so the API crate can implement
/// [`IntoResponse`] for it.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication | ErrorKind::Session => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Internal
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details stay in the logs; clients get a generic message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %err, source = ?err.source, "Request failed");
            "Internal server error".to_string()
        } else {
            err.message.clone()
        };

        let mut body = json!({
            "success": false,
            "error": {
                "kind": err.kind.to_string(),
                "message": message,
            }
        });

        // Unauthenticated callers get pointed at the login route.
        if status == StatusCode::UNAUTHORIZED {
            body["error"]["login"] = json!("POST /login");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let resp = ApiError(AppError::not_found("Document not found")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError(AppError::validation("Title is required")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError(AppError::authentication("Invalid email or password")).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = ApiError(AppError::conflict("Email already registered")).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = ApiError(AppError::database("boom")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
