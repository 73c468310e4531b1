//! Reporting and aggregation service.
//!
//! All figures are recomputed per request; nothing is cached.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use docustore_core::result::AppResult;
use docustore_database::repositories::report::{CategoryDocCount, ReportRepository};
use docustore_entity::document::model::DocumentWithCategory;

/// The landing dashboard for an authenticated user.
///
/// User and department counts are supplementary: if their statements
/// fail the dashboard still renders with zeros.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_documents: i64,
    pub total_categories: i64,
    pub total_users: i64,
    pub total_departments: i64,
    pub docs_by_category: Vec<CategoryDocCount>,
}

/// The full reports summary.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub total_documents: i64,
    pub total_categories: i64,
    pub total_departments: i64,
    pub total_users: i64,
    pub docs_by_category: Vec<CategoryDocCount>,
}

#[derive(Clone)]
pub struct ReportService {
    reports: Arc<ReportRepository>,
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService").finish()
    }
}

impl ReportService {
    pub fn new(reports: Arc<ReportRepository>) -> Self {
        Self { reports }
    }

    /// Compute the authenticated landing dashboard.
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let total_documents = self.reports.count_documents().await?;
        let total_categories = self.reports.count_categories().await?;
        let docs_by_category = self.reports.documents_by_category().await?;

        let total_users = match self.reports.count_users().await {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "User count unavailable, reporting zero");
                0
            }
        };
        let total_departments = match self.reports.count_departments().await {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "Department count unavailable, reporting zero");
                0
            }
        };

        Ok(DashboardStats {
            total_documents,
            total_categories,
            total_users,
            total_departments,
            docs_by_category,
        })
    }

    /// Compute the reports summary: all four totals plus the per-category
    /// grouping.
    pub async fn summary(&self) -> AppResult<ReportSummary> {
        Ok(ReportSummary {
            total_documents: self.reports.count_documents().await?,
            total_categories: self.reports.count_categories().await?,
            total_departments: self.reports.count_departments().await?,
            total_users: self.reports.count_users().await?,
            docs_by_category: self.reports.documents_by_category().await?,
        })
    }

    /// The ten most recently created documents.
    pub async fn recent_activity(&self) -> AppResult<Vec<DocumentWithCategory>> {
        self.reports.recent_documents(10).await
    }
}
