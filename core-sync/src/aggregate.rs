//! Category Aggregator
//!
//! Folds a flat set of mirrored records into category groups. A view,
//! recomputed on every call — the catalog rows remain the source of
//! truth.

use core_catalog::{AssetRecord, CategoryGroup};
use std::collections::HashMap;

/// Group records by exact category string.
///
/// Matching is case- and separator-sensitive: `"A B"` and `"A_B"` are
/// distinct categories here; URL-safe encoding happens per group via
/// `CategoryGroup::url_name`. Group order is the order categories are
/// first encountered while folding, so a fixed input order yields a
/// fixed output.
pub fn aggregate(records: Vec<AssetRecord>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = match index.get(&record.category) {
            Some(&i) => i,
            None => {
                index.insert(record.category.clone(), groups.len());
                groups.push(CategoryGroup::new(record.category.clone()));
                groups.len() - 1
            }
        };
        groups[slot].assets.push(record);
    }

    groups
}
