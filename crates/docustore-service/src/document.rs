//! Document store service.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use docustore_core::error::AppError;
use docustore_core::result::AppResult;
use docustore_database::repositories::category::CategoryRepository;
use docustore_database::repositories::document::DocumentRepository;
use docustore_entity::category::model::Category;
use docustore_entity::document::model::{
    CreateDocument, Document, DocumentWithCategory, UpdateDocument,
};

use crate::context::RequestContext;

/// Fields accepted when creating or overwriting a document.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub title: String,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub category_id: Option<Uuid>,
}

/// Summary stats shown alongside a document listing.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListStats {
    pub total_documents: i64,
    pub uncategorized: i64,
}

/// A document listing with its stats and the category choices for
/// the create/edit forms.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListing {
    pub documents: Vec<DocumentWithCategory>,
    pub stats: DocumentListStats,
    pub categories: Vec<Category>,
}

#[derive(Clone)]
pub struct DocumentService {
    documents: Arc<DocumentRepository>,
    categories: Arc<CategoryRepository>,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService").finish()
    }
}

impl DocumentService {
    pub fn new(documents: Arc<DocumentRepository>, categories: Arc<CategoryRepository>) -> Self {
        Self {
            documents,
            categories,
        }
    }

    /// List all documents, newest first, with stats and category choices.
    pub async fn list(&self) -> AppResult<DocumentListing> {
        let documents = self.documents.find_all_with_category().await?;
        let categories = self.categories.find_all().await?;
        let stats = listing_stats(&documents);
        Ok(DocumentListing {
            documents,
            stats,
            categories,
        })
    }

    /// List the current user's documents, newest first, with stats.
    pub async fn list_for_owner(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<(Vec<DocumentWithCategory>, DocumentListStats)> {
        let documents = self
            .documents
            .find_by_owner_with_category(ctx.user_id)
            .await?;
        let stats = listing_stats(&documents);
        Ok((documents, stats))
    }

    /// Fetch one document plus the category choices for the edit form.
    pub async fn get_with_choices(&self, id: Uuid) -> AppResult<(Document, Vec<Category>)> {
        let document = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;
        let categories = self.categories.find_all().await?;
        Ok((document, categories))
    }

    /// Create a document owned by the current user.
    pub async fn create(&self, ctx: &RequestContext, input: DocumentInput) -> AppResult<Document> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }

        let document = self
            .documents
            .create(&CreateDocument {
                title: title.to_string(),
                description: input.description,
                file_path: input.file_path,
                category_id: input.category_id,
                owner_id: Some(ctx.user_id),
            })
            .await?;

        info!(document_id = %document.id, user_id = %ctx.user_id, "Document created");
        Ok(document)
    }

    /// Full overwrite of a document's editable fields. Owner and
    /// creation time are never touched.
    pub async fn update(&self, id: Uuid, input: DocumentInput) -> AppResult<Document> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }

        self.documents
            .update(
                id,
                &UpdateDocument {
                    title: title.to_string(),
                    description: input.description,
                    file_path: input.file_path,
                    category_id: input.category_id,
                },
            )
            .await
    }

    /// Delete a document. Restricted to the owning user or an admin.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let document = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        if document.owner_id != Some(ctx.user_id) && !ctx.is_admin() {
            return Err(AppError::authorization(
                "Only the document owner or an admin can delete it",
            ));
        }

        self.documents.delete(id).await?;
        info!(document_id = %id, user_id = %ctx.user_id, "Document deleted");
        Ok(())
    }
}

fn listing_stats(documents: &[DocumentWithCategory]) -> DocumentListStats {
    DocumentListStats {
        total_documents: documents.len() as i64,
        uncategorized: documents
            .iter()
            .filter(|d| d.category_name.is_none())
            .count() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn doc(category: Option<&str>) -> DocumentWithCategory {
        DocumentWithCategory {
            id: Uuid::new_v4(),
            title: "t".into(),
            description: None,
            file_path: None,
            category_name: category.map(String::from),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_listing_stats_counts_uncategorized() {
        let docs = vec![doc(Some("HR")), doc(None), doc(None)];
        let stats = listing_stats(&docs);
        assert_eq!(stats.total_documents, 3);
        assert_eq!(stats.uncategorized, 2);
    }
}
