//! Sync Engine
//!
//! One reusable synchronization pipeline — walk, categorize, reconcile,
//! aggregate — instantiated per asset type with its own root folder,
//! store handle and repository. Replaces the per-type copies of this
//! state machine that tend to accrete in route code.

use std::sync::Arc;

use core_catalog::{AssetRepository, CategoryGroup};
use serde::Serialize;
use store_traits::remote::AssetStore;
use tracing::{info, instrument};

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::reconcile::Reconciler;
use crate::walker::PaginationWalker;

/// Per-asset-type engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Root folder of this asset type in the remote store, with or
    /// without a trailing `/` (e.g. `"Templates"`, `"Stickers/"`)
    pub root_folder: String,

    /// Items requested per listing page
    pub page_size: u32,

    /// Upper bound on pages per walk
    pub max_pages: u32,
}

impl EngineConfig {
    pub fn new(root_folder: impl Into<String>) -> Self {
        Self {
            root_folder: root_folder.into(),
            page_size: 500,
            max_pages: 100,
        }
    }

    /// Set the listing page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the walk page bound
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Outcome of one sync pass.
///
/// `truncated` distinguishes a complete sync from a degraded one (page
/// failure or page bound); callers must treat a truncated result as
/// best-effort, not a full snapshot of the remote store.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Assets discovered by the walk
    pub discovered: usize,
    /// Rows committed by the bulk upsert
    pub committed: u64,
    /// Whether the walk ended early
    pub truncated: bool,
}

/// Synchronization engine for one asset type.
pub struct SyncEngine {
    walker: PaginationWalker,
    reconciler: Reconciler,
    repository: Arc<dyn AssetRepository>,
    root_folder: String,
    page_size: u32,
}

impl SyncEngine {
    pub fn new(
        store: Arc<dyn AssetStore>,
        repository: Arc<dyn AssetRepository>,
        config: EngineConfig,
    ) -> Self {
        let root_folder = config.root_folder.trim_end_matches('/').to_string();

        Self {
            walker: PaginationWalker::new(store, config.max_pages),
            reconciler: Reconciler::new(repository.clone(), root_folder.clone()),
            repository,
            root_folder,
            page_size: config.page_size,
        }
    }

    /// Root folder this engine mirrors (normalized, no trailing `/`)
    pub fn root_folder(&self) -> &str {
        &self.root_folder
    }

    /// Mirror the remote store into the catalog: walk every page under
    /// the root folder, then reconcile the collected set in one bulk
    /// upsert.
    ///
    /// A failed or bounded walk yields a truncated (possibly empty)
    /// report, not an error; only a repository failure is an error.
    #[instrument(skip(self), fields(root = %self.root_folder))]
    pub async fn sync(&self) -> Result<SyncReport> {
        let prefix = format!("{}/", self.root_folder);
        let outcome = self.walker.walk(&prefix, self.page_size).await;

        let committed = self.reconciler.reconcile(&outcome.assets).await?;

        let report = SyncReport {
            discovered: outcome.assets.len(),
            committed,
            truncated: outcome.truncated,
        };

        info!(
            discovered = report.discovered,
            committed = report.committed,
            truncated = report.truncated,
            "Sync pass finished"
        );

        Ok(report)
    }

    /// Sync, then read the full mirrored set back and fold it into
    /// category groups — the `/categories` pipeline.
    pub async fn sync_and_group(&self) -> Result<(Vec<CategoryGroup>, SyncReport)> {
        let report = self.sync().await?;
        let records = self.repository.find_all().await?;

        Ok((aggregate(records), report))
    }
}
