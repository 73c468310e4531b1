//! Category taxonomy service.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use docustore_core::error::AppError;
use docustore_core::result::AppResult;
use docustore_database::repositories::category::CategoryRepository;
use docustore_entity::category::model::{Category, CreateCategory};

/// Summary stats shown alongside the category listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListStats {
    pub total_categories: i64,
    pub empty_categories: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub categories: Vec<Category>,
    pub stats: CategoryListStats,
}

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<CategoryRepository>,
}

impl std::fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryService").finish()
    }
}

impl CategoryService {
    pub fn new(categories: Arc<CategoryRepository>) -> Self {
        Self { categories }
    }

    /// List all categories alphabetically with listing stats.
    pub async fn list(&self) -> AppResult<CategoryListing> {
        let categories = self.categories.find_all().await?;
        let empty_categories = self.categories.count_empty().await?;
        let stats = CategoryListStats {
            total_categories: categories.len() as i64,
            empty_categories,
        };
        Ok(CategoryListing { categories, stats })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    pub async fn create(&self, name: &str, description: Option<String>) -> AppResult<Category> {
        let input = validated(name, description)?;
        let category = self.categories.create(&input).await?;
        info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<String>,
    ) -> AppResult<Category> {
        let input = validated(name, description)?;
        self.categories.update(id, &input).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.categories.delete(id).await? {
            return Err(AppError::not_found("Category not found"));
        }
        info!(category_id = %id, "Category deleted");
        Ok(())
    }
}

fn validated(name: &str, description: Option<String>) -> AppResult<CreateCategory> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    Ok(CreateCategory {
        name: name.to_string(),
        description,
    })
}
