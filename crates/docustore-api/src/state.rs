//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use docustore_auth::session::manager::SessionManager;
use docustore_core::config::AppConfig;
use docustore_core::traits::storage::StorageBackend;
use docustore_database::repositories::category::CategoryRepository;
use docustore_database::repositories::department::DepartmentRepository;
use docustore_database::repositories::document::DocumentRepository;
use docustore_database::repositories::folder::FolderRepository;
use docustore_database::repositories::folder_file::FolderFileRepository;
use docustore_database::repositories::report::ReportRepository;
use docustore_database::repositories::session::SessionRepository;
use docustore_database::repositories::user::UserRepository;
use docustore_service::category::CategoryService;
use docustore_service::department::DepartmentService;
use docustore_service::document::DocumentService;
use docustore_service::folder::FolderService;
use docustore_service::report::ReportService;
use docustore_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Physical file store.
    pub storage: Arc<dyn StorageBackend>,

    /// Session lifecycle manager (signup, login, token validation).
    pub session_manager: Arc<SessionManager>,

    /// Document service.
    pub document_service: Arc<DocumentService>,
    /// Category service.
    pub category_service: Arc<CategoryService>,
    /// Department service.
    pub department_service: Arc<DepartmentService>,
    /// User account service.
    pub user_service: Arc<UserService>,
    /// Folder and file store service.
    pub folder_service: Arc<FolderService>,
    /// Reporting service.
    pub report_service: Arc<ReportService>,
}

impl AppState {
    /// Wire up repositories and services over the given pool and storage
    /// backend.
    pub fn build(
        config: Arc<AppConfig>,
        db_pool: PgPool,
        storage: Arc<dyn StorageBackend>,
    ) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let session_repo = SessionRepository::new(db_pool.clone());
        let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));
        let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
        let department_repo = Arc::new(DepartmentRepository::new(db_pool.clone()));
        let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
        let folder_file_repo = Arc::new(FolderFileRepository::new(db_pool.clone()));
        let report_repo = Arc::new(ReportRepository::new(db_pool.clone()));

        let session_manager = Arc::new(SessionManager::new(
            UserRepository::new(db_pool.clone()),
            session_repo,
            &config.auth,
            &config.session,
        ));

        let document_service = Arc::new(DocumentService::new(
            Arc::clone(&document_repo),
            Arc::clone(&category_repo),
        ));
        let category_service = Arc::new(CategoryService::new(Arc::clone(&category_repo)));
        let department_service = Arc::new(DepartmentService::new(Arc::clone(&department_repo)));
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let folder_service = Arc::new(FolderService::new(
            Arc::clone(&folder_repo),
            Arc::clone(&folder_file_repo),
            Arc::clone(&storage),
            config.storage.clone(),
        ));
        let report_service = Arc::new(ReportService::new(Arc::clone(&report_repo)));

        Self {
            config,
            db_pool,
            storage,
            session_manager,
            document_service,
            category_service,
            department_service,
            user_service,
            folder_service,
            report_service,
        }
    }
}
