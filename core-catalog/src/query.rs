//! Read-side query façade over the asset repository
//!
//! Pure reads; nothing here ever triggers synchronization. Category
//! lookups accept URL-safe names (underscores for spaces) and report a
//! missing category as an explicit not-found error, distinct from a
//! valid empty result set.

use std::sync::Arc;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::{decode_url_name, AssetRecord, SearchFilter};
use crate::repositories::AssetRepository;

/// Query façade for one asset kind
pub struct AssetQuery {
    repository: Arc<dyn AssetRepository>,
}

impl AssetQuery {
    pub fn new(repository: Arc<dyn AssetRepository>) -> Self {
        Self { repository }
    }

    /// All records for this kind
    pub async fn list_all(&self) -> Result<Vec<AssetRecord>> {
        self.repository.find_all().await
    }

    /// Records in one category, addressed by URL-safe display name
    ///
    /// Decodes `_` back to spaces before matching. Returns the decoded
    /// category together with its records.
    ///
    /// # Errors
    ///
    /// `CatalogError::NotFound` when no record carries the category —
    /// an explicit signal, not an empty success.
    pub async fn by_category(&self, display_name: &str) -> Result<(String, Vec<AssetRecord>)> {
        let category = decode_url_name(display_name);
        debug!(category = %category, "Category lookup");

        let records = self.repository.find_by_category(&category).await?;

        if records.is_empty() {
            return Err(CatalogError::NotFound {
                entity_type: "Category".to_string(),
                id: category,
            });
        }

        Ok((category, records))
    }

    /// Conjunctive filtered search
    ///
    /// Format matching is case-insensitive; minimum dimensions are
    /// inclusive lower bounds; all requested tags must be present.
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<AssetRecord>> {
        self.repository.search(filter).await
    }

    /// Record count for this kind
    pub async fn count(&self) -> Result<i64> {
        self.repository.count().await
    }
}
