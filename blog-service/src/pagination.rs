/// 1-indexed page math shared by the listing endpoints.
///
/// Out-of-range pages are not an error: a page past the end yields an empty
/// slice, a page below 1 is treated as page 1, and an unparseable page
/// parameter falls back to the default.
use serde::Serialize;

/// One page of an ordered collection.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: i64,
    pub current_page: i64,
}

/// Clamp a requested page number to the valid range.
pub fn clamp_page(page: i64) -> i64 {
    page.max(1)
}

/// Offset of the first row of `page` for the given page size.
pub fn offset(page: i64, per_page: i64) -> i64 {
    (clamp_page(page) - 1) * per_page
}

/// Number of pages needed to hold `total_items` rows. Zero for an empty
/// collection.
pub fn total_pages(total_items: i64, per_page: i64) -> i64 {
    if total_items <= 0 {
        0
    } else {
        (total_items + per_page - 1) / per_page
    }
}

/// Parse a raw page query parameter, degrading to page 1 on anything
/// malformed or out of range.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(clamp_page)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
    }

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(2, 10), 10);
        assert_eq!(offset(3, 5), 10);
    }

    #[test]
    fn test_pages_below_one_are_clamped() {
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(-3), 1);
        assert_eq!(offset(-3, 10), 0);
    }

    #[test]
    fn test_parse_page_degrades_gracefully() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("2")), 2);
        assert_eq!(parse_page(Some(" 7 ")), 7);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("-1")), 1);
    }

    #[test]
    fn test_page_slices_cover_collection_exactly_once() {
        // 12 items, page size 10: page 1 holds rows 0..10, page 2 rows 10..12.
        let items: Vec<i64> = (0..12).collect();
        let per_page = 10;
        let pages = total_pages(items.len() as i64, per_page);
        assert_eq!(pages, 2);

        let mut seen = Vec::new();
        for page in 1..=pages {
            let start = offset(page, per_page) as usize;
            let end = (start + per_page as usize).min(items.len());
            seen.extend_from_slice(&items[start..end]);
        }
        assert_eq!(seen, items);

        // A page past the end is empty, not an error.
        let start = offset(pages + 1, per_page) as usize;
        assert!(start >= items.len());
    }
}
