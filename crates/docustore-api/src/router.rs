//! Route definitions for the Docustore HTTP API.
//!
//! Paths mirror the screens of the original internal tool. The router
//! receives `AppState` and threads it through every route via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(document_routes())
        .merge(taxonomy_routes())
        .merge(user_routes())
        .merge(file_manager_routes())
        .merge(report_routes())
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Public pages: landing/dashboard, about, contact, team.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/about", get(handlers::pages::about))
        .route("/contact", get(handlers::pages::contact))
        .route("/team", get(handlers::pages::team))
}

/// Session gate: signup, login, logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/signup",
            get(handlers::auth::signup_form).post(handlers::auth::signup),
        )
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
}

/// Document store CRUD.
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(handlers::documents::list))
        .route(
            "/documents/create",
            get(handlers::documents::create_form).post(handlers::documents::create),
        )
        .route(
            "/documents/{id}/edit",
            get(handlers::documents::edit_form).post(handlers::documents::edit),
        )
        .route("/documents/{id}/delete", post(handlers::documents::delete))
}

/// Category and department CRUD.
fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::categories::list))
        .route(
            "/categories/create",
            get(handlers::categories::create_form).post(handlers::categories::create),
        )
        .route(
            "/categories/{id}/edit",
            get(handlers::categories::edit_form).post(handlers::categories::edit),
        )
        .route("/categories/{id}/delete", post(handlers::categories::delete))
        .route("/departments", get(handlers::departments::list))
        .route(
            "/departments/create",
            get(handlers::departments::create_form).post(handlers::departments::create),
        )
        .route(
            "/departments/{id}/edit",
            get(handlers::departments::edit_form).post(handlers::departments::edit),
        )
        .route(
            "/departments/{id}/delete",
            post(handlers::departments::delete),
        )
}

/// User account CRUD.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::users::list))
        .route(
            "/users/create",
            get(handlers::users::create_form).post(handlers::users::create),
        )
        .route(
            "/users/{id}/edit",
            get(handlers::users::edit_form).post(handlers::users::edit),
        )
        .route("/users/{id}/delete", post(handlers::users::delete))
}

/// Folder hierarchy and file store.
fn file_manager_routes() -> Router<AppState> {
    Router::new()
        .route("/file-manager", get(handlers::file_manager::root))
        .route(
            "/file-manager/folder/{id}",
            get(handlers::file_manager::browse),
        )
        .route(
            "/file-manager/folders/create",
            post(handlers::file_manager::create_folder),
        )
        .route(
            "/file-manager/folder/{id}/upload",
            post(handlers::file_manager::upload),
        )
        .route(
            "/file-manager/files/{id}/download",
            get(handlers::file_manager::download),
        )
}

/// Reports, per-user dashboard, activity feed.
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(handlers::reports::reports))
        .route("/my-dashboard", get(handlers::reports::my_dashboard))
        .route("/activity", get(handlers::reports::activity))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let mut layer = CorsLayer::new().allow_methods(methods).allow_headers(Any);

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        layer = layer.allow_origin(origins);
    }

    layer
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use docustore_core::config::AppConfig;
    use docustore_storage::LocalStorageBackend;

    use super::*;

    // The pool is lazy and the storage root is a scratch directory, so no
    // request below touches a database; gated routes reject at the
    // missing Authorization header.
    async fn test_state() -> (AppState, tempfile::TempDir) {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/docustore_test")
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageBackend::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let state = AppState::build(Arc::new(AppConfig::default()), pool, Arc::new(storage));
        (state, dir)
    }

    async fn status_of(router: &Router, path: &str) -> StatusCode {
        router
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_create_forms_are_registered_and_gated() {
        let (state, _dir) = test_state().await;
        let router = build_router(state);

        for path in [
            "/documents/create",
            "/categories/create",
            "/departments/create",
            "/users/create",
        ] {
            assert_eq!(
                status_of(&router, path).await,
                StatusCode::UNAUTHORIZED,
                "GET {path}"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (state, _dir) = test_state().await;
        let router = build_router(state);

        assert_eq!(status_of(&router, "/nope").await, StatusCode::NOT_FOUND);
    }
}
