//! Pagination Walker
//!
//! Drives the remote store's cursor-based listing across all pages for
//! one prefix. A page-fetch failure is not fatal: the walk stops and
//! returns whatever was accumulated, flagged as truncated, so a
//! transient store fault degrades a sync instead of failing it.

use std::sync::Arc;

use store_traits::remote::{AssetStore, StoreItem};
use tracing::{debug, info, instrument, warn};

use crate::categorize::folder_path;

/// One discovered remote asset, with its folder path already derived
/// from the store identifier. Ephemeral: consumed by the reconciler and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAsset {
    /// Fully qualified store identifier
    pub external_id: String,
    /// Delivery URL
    pub url: String,
    /// Pixel width
    pub width: i64,
    /// Pixel height
    pub height: i64,
    /// Image format
    pub format: String,
    /// Substring of the identifier before its last separator, or the
    /// root sentinel when there is none
    pub folder_path: String,
}

impl From<StoreItem> for RemoteAsset {
    fn from(item: StoreItem) -> Self {
        let folder = folder_path(&item.id).to_string();
        Self {
            external_id: item.id,
            url: item.url,
            width: item.width,
            height: item.height,
            format: item.format,
            folder_path: folder,
        }
    }
}

/// Result of a pagination walk.
///
/// `truncated` is set when a page fetch failed or the page bound was
/// hit; the asset list is then a best-effort prefix of the true set,
/// not a complete snapshot.
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub assets: Vec<RemoteAsset>,
    pub truncated: bool,
    pub pages: u32,
}

/// Walks a remote store's folder namespace one page at a time.
pub struct PaginationWalker {
    store: Arc<dyn AssetStore>,
    /// Upper bound on pages per walk; guards against a cursor that
    /// never terminates.
    max_pages: u32,
}

impl PaginationWalker {
    pub fn new(store: Arc<dyn AssetStore>, max_pages: u32) -> Self {
        Self { store, max_pages }
    }

    /// Walk all pages under `prefix`, threading the continuation cursor
    /// until the store stops returning one.
    ///
    /// Never fails: transport errors end the walk early with
    /// `truncated: true`. No ordering is guaranteed across or within
    /// pages.
    #[instrument(skip(self), fields(prefix = %prefix))]
    pub async fn walk(&self, prefix: &str, page_size: u32) -> WalkOutcome {
        let mut assets: Vec<RemoteAsset> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0u32;
        let mut truncated = false;

        loop {
            if pages >= self.max_pages {
                warn!(
                    max_pages = self.max_pages,
                    "Page bound reached; truncating walk"
                );
                truncated = true;
                break;
            }

            pages += 1;
            debug!("Fetching page {} (cursor: {:?})", pages, cursor);

            match self.store.list_page(prefix, page_size, cursor.clone()).await {
                Ok(page) => {
                    assets.extend(page.items.into_iter().map(RemoteAsset::from));

                    cursor = page.next_cursor;
                    if cursor.is_none() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Page fetch failed; returning partial walk");
                    truncated = true;
                    break;
                }
            }
        }

        info!(
            assets = assets.len(),
            pages, truncated, "Walk finished"
        );

        WalkOutcome {
            assets,
            truncated,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use store_traits::remote::AssetPage;
    use store_traits::StoreError;

    /// Store that replays a scripted sequence of page results.
    struct ScriptedStore {
        pages: Mutex<VecDeque<store_traits::Result<AssetPage>>>,
    }

    impl ScriptedStore {
        fn new(pages: Vec<store_traits::Result<AssetPage>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
            }
        }
    }

    #[async_trait]
    impl AssetStore for ScriptedStore {
        async fn list_page(
            &self,
            _prefix: &str,
            _page_size: u32,
            _cursor: Option<String>,
        ) -> store_traits::Result<AssetPage> {
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(AssetPage::default()))
        }
    }

    fn item(id: &str) -> StoreItem {
        StoreItem {
            id: id.to_string(),
            url: format!("https://cdn.example.com/{}.png", id),
            width: 100,
            height: 100,
            format: "png".to_string(),
        }
    }

    fn page(ids: &[&str], next_cursor: Option<&str>) -> store_traits::Result<AssetPage> {
        Ok(AssetPage {
            items: ids.iter().map(|id| item(id)).collect(),
            next_cursor: next_cursor.map(String::from),
        })
    }

    #[tokio::test]
    async fn test_walk_accumulates_across_pages() {
        let store = ScriptedStore::new(vec![
            page(&["Templates/a", "Templates/b"], Some("c1")),
            page(&["Templates/Holiday/c"], None),
        ]);
        let walker = PaginationWalker::new(Arc::new(store), 100);

        let outcome = walker.walk("Templates/", 500).await;

        assert_eq!(outcome.assets.len(), 3);
        assert_eq!(outcome.pages, 2);
        assert!(!outcome.truncated);
    }

    #[tokio::test]
    async fn test_walk_derives_folder_paths() {
        let store = ScriptedStore::new(vec![page(
            &["Templates/Holiday/Winter/snowman", "loose"],
            None,
        )]);
        let walker = PaginationWalker::new(Arc::new(store), 100);

        let outcome = walker.walk("Templates/", 500).await;

        assert_eq!(outcome.assets[0].folder_path, "Templates/Holiday/Winter");
        assert_eq!(outcome.assets[1].folder_path, "root");
    }

    #[tokio::test]
    async fn test_failed_page_truncates_without_error() {
        let store = ScriptedStore::new(vec![
            page(&["Templates/a", "Templates/b"], Some("c1")),
            Err(StoreError::OperationFailed("boom".to_string())),
        ]);
        let walker = PaginationWalker::new(Arc::new(store), 100);

        let outcome = walker.walk("Templates/", 500).await;

        assert_eq!(outcome.assets.len(), 2);
        assert!(outcome.truncated);
    }

    #[tokio::test]
    async fn test_failed_first_page_yields_empty_truncated_walk() {
        let store = ScriptedStore::new(vec![Err(StoreError::NotAvailable(
            "credentials missing".to_string(),
        ))]);
        let walker = PaginationWalker::new(Arc::new(store), 100);

        let outcome = walker.walk("Templates/", 500).await;

        assert!(outcome.assets.is_empty());
        assert!(outcome.truncated);
    }

    #[tokio::test]
    async fn test_page_bound_truncates_endless_cursor() {
        // Cursor that never terminates
        let store = ScriptedStore::new(
            (0..10)
                .map(|i| page(&[format!("Templates/{}", i).as_str()], Some("again")))
                .collect(),
        );
        let walker = PaginationWalker::new(Arc::new(store), 3);

        let outcome = walker.walk("Templates/", 500).await;

        assert_eq!(outcome.pages, 3);
        assert_eq!(outcome.assets.len(), 3);
        assert!(outcome.truncated);
    }
}
