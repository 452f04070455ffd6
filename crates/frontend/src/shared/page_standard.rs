//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_review--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity searchable: the id copied from the DOM
//! inspector leads straight to `domain/a002_review/`.

/// Admin list of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Storefront catalog browsing.
pub const PAGE_CAT_STOREFRONT: &str = "storefront";

/// Service pages (not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_review--list"));
        assert!(is_valid_page_id("search--storefront"));
        assert!(!is_valid_page_id("a002_review"));
        assert!(!is_valid_page_id("--list"));
    }
}
