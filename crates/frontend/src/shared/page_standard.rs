//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_catalogues--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Build a page id in the `{entity}--{category}` format.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_round_trip() {
        let id = page_id("a001_catalogues", PAGE_CAT_LIST);
        assert_eq!(id, "a001_catalogues--list");
        assert!(is_valid_page_id(&id));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("a001_catalogues"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_catalogues--"));
    }
}
