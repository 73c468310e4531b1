//! Public pages: landing/dashboard, about, contact, team.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde_json::{Value, json};

use crate::dto::response::TeamMember;
use crate::error::ApiError;
use crate::extractors::auth::bearer_token;
use crate::state::AppState;

/// GET /
///
/// Without a valid token this is the public landing page. With one, it
/// is the live dashboard.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let authenticated = match bearer_token(&headers) {
        Some(token) => state.session_manager.validate_token(token).await.is_ok(),
        None => false,
    };

    if !authenticated {
        return Ok(Json(json!({
            "page": "landing",
            "message": "Welcome to Docustore. Log in to see the dashboard.",
        })));
    }

    let stats = state.report_service.dashboard().await?;
    Ok(Json(json!({
        "page": "dashboard",
        "success": true,
        "data": stats,
    })))
}

/// GET /about
pub async fn about() -> Json<Value> {
    Json(json!({
        "page": "about",
        "message": "Docustore is an internal document and file management service.",
    }))
}

/// GET /contact
pub async fn contact() -> Json<Value> {
    Json(json!({
        "page": "contact",
        "email": "support@example.com",
    }))
}

/// GET /team
pub async fn team() -> Json<Value> {
    let members = vec![
        TeamMember {
            name: "Alice Johnson".into(),
            role: "Project Lead".into(),
            email: "alice.johnson@example.com".into(),
            phone: "+1 555-0123".into(),
        },
        TeamMember {
            name: "Bob Martinez".into(),
            role: "Backend Engineer".into(),
            email: "bob.martinez@example.com".into(),
            phone: "+1 555-0456".into(),
        },
        TeamMember {
            name: "Carol Lee".into(),
            role: "Frontend Engineer".into(),
            email: "carol.lee@example.com".into(),
            phone: "+1 555-0789".into(),
        },
    ];
    Json(json!({ "page": "team", "members": members }))
}
