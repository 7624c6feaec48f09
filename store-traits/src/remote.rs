//! Remote Asset Store Abstraction
//!
//! The listing boundary between the sync engine and a CDN-style asset
//! store. The store exposes its image inventory as a folder-path
//! namespace, listed one page at a time under a path prefix with an
//! opaque continuation cursor.

use async_trait::async_trait;

use crate::error::Result;

/// One remote resource as listed by the store.
///
/// The `id` is the store's fully qualified identifier and embeds the
/// folder path (e.g. `"Templates/Holiday/snowman"`); interpretation of
/// that path is the engine's job, not the store's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreItem {
    /// Fully qualified store identifier
    pub id: String,
    /// Delivery URL for the asset
    pub url: String,
    /// Pixel width
    pub width: i64,
    /// Pixel height
    pub height: i64,
    /// Image format (e.g. "png", "jpg")
    pub format: String,
}

/// One page of a listing walk.
///
/// `next_cursor` is an opaque continuation token; `None` signals the end
/// of pagination.
#[derive(Debug, Clone, Default)]
pub struct AssetPage {
    pub items: Vec<StoreItem>,
    pub next_cursor: Option<String>,
}

/// Paginated listing over a remote asset store.
///
/// Implementations must treat `cursor` as opaque round-trip state: the
/// value handed back in `AssetPage::next_cursor` is passed verbatim into
/// the next `list_page` call. Page size is a hint; stores may return
/// fewer items.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// List one page of assets under `prefix`.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying transport or the store API call
    /// fails. A failed page does not invalidate previously returned
    /// pages; callers decide whether to continue or degrade.
    async fn list_page(
        &self,
        prefix: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<AssetPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_page_default_is_terminal() {
        let page = AssetPage::default();
        assert!(page.items.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_store_item_equality() {
        let a = StoreItem {
            id: "Templates/Holiday/snowman".to_string(),
            url: "https://cdn.example.com/snowman.png".to_string(),
            width: 800,
            height: 600,
            format: "png".to_string(),
        };
        assert_eq!(a, a.clone());
    }
}
