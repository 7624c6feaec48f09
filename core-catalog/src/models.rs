//! Domain models for the asset catalog
//!
//! Persistent asset records, the upsert payload the reconciler produces,
//! and the derived category-group view served to clients.

use serde::{Deserialize, Serialize};

/// Mirrored asset record
///
/// One row per asset the remote store exposes. `name` is the store's
/// fully qualified identifier and is the natural key within an asset
/// kind; re-syncing the same identifier updates the row in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Store identifier, unique within an asset kind
    pub name: String,
    /// Category derived from the asset's folder path
    pub category: String,
    /// Delivery URL
    pub image_url: String,
    /// User-curated tags; never derived from the store
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pixel width
    pub width: Option<i64>,
    /// Pixel height
    pub height: Option<i64>,
    /// Image format (lowercase, e.g. "png")
    pub format: Option<String>,
    /// When first mirrored (unix seconds)
    pub created_at: i64,
    /// Last sync touch (unix seconds)
    pub updated_at: i64,
}

/// Field-complete derived state for one asset, as produced by the
/// reconciler.
///
/// Deliberately excludes `tags`: on insert they default to empty, on
/// update the stored value is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpsert {
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub format: Option<String>,
}

impl AssetUpsert {
    /// Validate upsert data
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Asset name cannot be empty".to_string());
        }

        if self.image_url.trim().is_empty() {
            return Err("Asset image URL cannot be empty".to_string());
        }

        Ok(())
    }
}

/// One category with its member assets — a view recomputed from
/// `AssetRecord` rows on every aggregation call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Display name (exact category string)
    pub name: String,
    /// URL-safe name: spaces replaced with underscores
    pub url_name: String,
    /// Member records, in repository read order
    pub assets: Vec<AssetRecord>,
}

impl CategoryGroup {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let url_name = encode_url_name(&name);
        Self {
            name,
            url_name,
            assets: Vec::new(),
        }
    }
}

/// Encode a category name for use in URLs: spaces become underscores.
pub fn encode_url_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Decode a URL-safe category name back to its display form.
///
/// Inverse of [`encode_url_name`] for any name that contained no
/// underscores originally.
pub fn decode_url_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Conjunctive search filter over asset records
///
/// All present fields must match: exact category, case-insensitive
/// format, inclusive minimum dimensions, and tag superset (every
/// requested tag present on the record).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub category: Option<String>,
    pub format: Option<String>,
    pub min_width: Option<i64>,
    pub min_height: Option<i64>,
    pub tags: Vec<String>,
}

impl SearchFilter {
    /// True when no filter field is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.format.is_none()
            && self.min_width.is_none()
            && self.min_height.is_none()
            && self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_name_round_trip() {
        let names = ["Holiday", "Happy Birthday", "Holiday/Winter Fun", "root"];

        for name in names {
            let encoded = encode_url_name(name);
            assert!(!encoded.contains(' '));
            assert_eq!(decode_url_name(&encoded), name);
        }
    }

    #[test]
    fn test_category_group_url_name() {
        let group = CategoryGroup::new("Happy Birthday");
        assert_eq!(group.url_name, "Happy_Birthday");
        assert!(group.assets.is_empty());
    }

    #[test]
    fn test_upsert_validation() {
        let valid = AssetUpsert {
            name: "Templates/Holiday/snowman".to_string(),
            category: "Holiday".to_string(),
            image_url: "https://cdn.example.com/snowman.png".to_string(),
            width: Some(800),
            height: Some(600),
            format: Some("png".to_string()),
        };
        assert!(valid.validate().is_ok());

        let blank_name = AssetUpsert {
            name: "   ".to_string(),
            ..valid.clone()
        };
        assert!(blank_name.validate().is_err());

        let blank_url = AssetUpsert {
            image_url: String::new(),
            ..valid
        };
        assert!(blank_url.validate().is_err());
    }

    #[test]
    fn test_search_filter_is_empty() {
        assert!(SearchFilter::default().is_empty());

        let filter = SearchFilter {
            min_width: Some(100),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}
