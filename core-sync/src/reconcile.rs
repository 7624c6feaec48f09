//! Reconciler
//!
//! Folds a collected set of remote assets into the catalog with one
//! idempotent bulk upsert, keyed on the asset's store identifier.
//! Submitting the batch as a single repository operation keeps
//! concurrent readers from observing a half-applied sync.

use std::sync::Arc;

use core_catalog::{AssetRepository, AssetUpsert};
use tracing::{debug, info, instrument};

use crate::categorize::categorize;
use crate::error::Result;
use crate::walker::RemoteAsset;

/// Reconciles walker output into the asset repository.
pub struct Reconciler {
    repository: Arc<dyn AssetRepository>,
    root_folder: String,
}

impl Reconciler {
    pub fn new(repository: Arc<dyn AssetRepository>, root_folder: impl Into<String>) -> Self {
        let root_folder = root_folder.into().trim_end_matches('/').to_string();
        Self {
            repository,
            root_folder,
        }
    }

    /// Derive the upsert payload for one remote asset.
    fn to_upsert(&self, asset: &RemoteAsset) -> AssetUpsert {
        AssetUpsert {
            name: asset.external_id.clone(),
            category: categorize(&asset.folder_path, &self.root_folder),
            image_url: asset.url.clone(),
            width: Some(asset.width),
            height: Some(asset.height),
            format: if asset.format.is_empty() {
                None
            } else {
                Some(asset.format.clone())
            },
        }
    }

    /// Upsert the batch into the repository as one operation.
    ///
    /// Per key: insert if absent, otherwise overwrite the derived
    /// fields while leaving curated tags untouched. An empty input is a
    /// no-op — no bulk write is issued at all.
    ///
    /// # Errors
    ///
    /// A bulk-write failure is surfaced to the caller; it is not
    /// retried here.
    #[instrument(skip(self, assets), fields(count = assets.len()))]
    pub async fn reconcile(&self, assets: &[RemoteAsset]) -> Result<u64> {
        if assets.is_empty() {
            debug!("Nothing to reconcile");
            return Ok(0);
        }

        let batch: Vec<AssetUpsert> = assets.iter().map(|a| self.to_upsert(a)).collect();

        let committed = self.repository.bulk_upsert(&batch).await?;

        info!(committed, "Reconciled assets into the catalog");
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_catalog::{
        create_test_pool, AssetRecord, CatalogError, SearchFilter, SqliteAssetRepository,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Repository wrapper that counts bulk-upsert calls.
    struct CountingRepository {
        inner: SqliteAssetRepository,
        bulk_calls: AtomicUsize,
    }

    #[async_trait]
    impl AssetRepository for CountingRepository {
        async fn bulk_upsert(
            &self,
            records: &[AssetUpsert],
        ) -> std::result::Result<u64, CatalogError> {
            self.bulk_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.bulk_upsert(records).await
        }

        async fn find_all(&self) -> std::result::Result<Vec<AssetRecord>, CatalogError> {
            self.inner.find_all().await
        }

        async fn find_by_category(
            &self,
            category: &str,
        ) -> std::result::Result<Vec<AssetRecord>, CatalogError> {
            self.inner.find_by_category(category).await
        }

        async fn search(
            &self,
            filter: &SearchFilter,
        ) -> std::result::Result<Vec<AssetRecord>, CatalogError> {
            self.inner.search(filter).await
        }

        async fn count(&self) -> std::result::Result<i64, CatalogError> {
            self.inner.count().await
        }
    }

    async fn counting_repository() -> Arc<CountingRepository> {
        let pool = create_test_pool().await.unwrap();
        Arc::new(CountingRepository {
            inner: SqliteAssetRepository::new(pool, "templates"),
            bulk_calls: AtomicUsize::new(0),
        })
    }

    fn remote(id: &str, width: i64) -> RemoteAsset {
        RemoteAsset {
            external_id: id.to_string(),
            url: format!("https://cdn.example.com/{}.png", id),
            width,
            height: width / 2,
            format: "png".to_string(),
            folder_path: crate::categorize::folder_path(id).to_string(),
        }
    }

    #[tokio::test]
    async fn test_reconcile_derives_categories() {
        let repository = counting_repository().await;
        let reconciler = Reconciler::new(repository.clone(), "Templates");

        let committed = reconciler
            .reconcile(&[
                remote("Templates/Holiday/Winter/snowman", 800),
                remote("Templates/cake", 400),
            ])
            .await
            .unwrap();

        assert_eq!(committed, 2);

        let records = repository.find_all().await.unwrap();
        let by_name: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.name.as_str(), r.category.as_str()))
            .collect();

        assert!(by_name.contains(&("Templates/Holiday/Winter/snowman", "Holiday/Winter")));
        assert!(by_name.contains(&("Templates/cake", "root")));
    }

    #[tokio::test]
    async fn test_empty_input_issues_no_bulk_write() {
        let repository = counting_repository().await;
        let reconciler = Reconciler::new(repository.clone(), "Templates");

        let committed = reconciler.reconcile(&[]).await.unwrap();

        assert_eq!(committed, 0);
        assert_eq!(repository.bulk_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reconcile_is_idempotent() {
        let repository = counting_repository().await;
        let reconciler = Reconciler::new(repository.clone(), "Templates");

        let assets = vec![remote("Templates/Holiday/a", 100), remote("Templates/b", 200)];

        reconciler.reconcile(&assets).await.unwrap();
        let first = repository.find_all().await.unwrap();

        reconciler.reconcile(&assets).await.unwrap();
        let second = repository.find_all().await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(
            first
                .iter()
                .map(|r| (&r.name, &r.category, r.width))
                .collect::<Vec<_>>(),
            second
                .iter()
                .map(|r| (&r.name, &r.category, r.width))
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_duplicate_key_in_batch_keeps_last_seen() {
        let repository = counting_repository().await;
        let reconciler = Reconciler::new(repository.clone(), "Templates");

        reconciler
            .reconcile(&[
                remote("Templates/Holiday/a", 100),
                remote("Templates/Holiday/a", 640),
            ])
            .await
            .unwrap();

        let records = repository.find_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].width, Some(640));
        assert_eq!(repository.bulk_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_trailing_slash_root_is_normalized() {
        let repository = counting_repository().await;
        let reconciler = Reconciler::new(repository.clone(), "Templates/");

        reconciler
            .reconcile(&[remote("Templates/Holiday/a", 100)])
            .await
            .unwrap();

        let records = repository.find_all().await.unwrap();
        assert_eq!(records[0].category, "Holiday");
    }
}
