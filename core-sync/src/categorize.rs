//! Path Categorizer
//!
//! Pure derivation of folder paths and category labels from store
//! identifiers. A store identifier embeds its folder path, e.g.
//! `"Templates/Holiday/Winter/snowman"`; the folder path is everything
//! before the last separator, and the category is the folder path with
//! the configured root folder stripped.

/// Canonical category for assets directly under the root folder, or
/// with no folder path at all. Applied uniformly across asset types.
pub const ROOT_CATEGORY: &str = "root";

/// Folder path of a store identifier: the substring before the last
/// `/`, or [`ROOT_CATEGORY`] when the identifier has no separator.
pub fn folder_path(external_id: &str) -> &str {
    match external_id.rfind('/') {
        Some(idx) => &external_id[..idx],
        None => ROOT_CATEGORY,
    }
}

/// Derive a category label from a folder path.
///
/// Strips a leading `"{root_folder}/"` segment; the remainder (possibly
/// containing further separators for nested categories) is the category
/// verbatim. A folder path equal to the root folder itself — an asset
/// sitting directly under the root — maps to [`ROOT_CATEGORY`]. A folder
/// path outside the root is returned unchanged.
///
/// Total and deterministic: every input maps to a non-empty category.
/// `root_folder` is accepted with or without a trailing `/`.
pub fn categorize(folder_path: &str, root_folder: &str) -> String {
    let root = root_folder.trim_end_matches('/');

    if folder_path.is_empty() || folder_path == ROOT_CATEGORY || folder_path == root {
        return ROOT_CATEGORY.to_string();
    }

    match folder_path
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        Some(_) => ROOT_CATEGORY.to_string(),
        None => folder_path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_path_of_nested_id() {
        assert_eq!(
            folder_path("Templates/Holiday/Winter/snowman"),
            "Templates/Holiday/Winter"
        );
        assert_eq!(folder_path("Templates/cake"), "Templates");
    }

    #[test]
    fn test_folder_path_without_separator_is_root() {
        assert_eq!(folder_path("loose-asset"), ROOT_CATEGORY);
    }

    #[test]
    fn test_categorize_nested() {
        assert_eq!(
            categorize("Templates/Holiday/Winter", "Templates"),
            "Holiday/Winter"
        );
        assert_eq!(categorize("Templates/Holiday", "Templates"), "Holiday");
    }

    #[test]
    fn test_categorize_directly_under_root_is_sentinel() {
        assert_eq!(categorize("Templates", "Templates"), ROOT_CATEGORY);
        assert_eq!(categorize("root", "Templates"), ROOT_CATEGORY);
        assert_eq!(categorize("", "Templates"), ROOT_CATEGORY);
    }

    #[test]
    fn test_categorize_accepts_trailing_slash_root() {
        assert_eq!(
            categorize("Stickers/Animals", "Stickers/"),
            "Animals"
        );
        assert_eq!(categorize("Stickers", "Stickers/"), ROOT_CATEGORY);
    }

    #[test]
    fn test_categorize_requires_segment_boundary() {
        // "TemplatesOld" shares a prefix with the root but is a
        // different folder; it must not be stripped.
        assert_eq!(
            categorize("TemplatesOld/Foo", "Templates"),
            "TemplatesOld/Foo"
        );
    }

    #[test]
    fn test_categorize_outside_root_is_verbatim() {
        assert_eq!(categorize("Other/Foo", "Templates"), "Other/Foo");
    }

    #[test]
    fn test_categorize_preserves_spaces_and_case() {
        assert_eq!(
            categorize("Templates/Happy Birthday", "Templates"),
            "Happy Birthday"
        );
        assert_eq!(categorize("Templates/HOLIDAY", "Templates"), "HOLIDAY");
    }
}
