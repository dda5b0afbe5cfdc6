//! Pagination constants and math for admin listings.

/// Fixed number of projects per dashboard page.
pub const PAGE_SIZE: i64 = 8;

/// Row offset for a 1-based page number. Pages below 1 are treated as 1.
pub fn offset(page: i64) -> i64 {
    (page.max(1) - 1) * PAGE_SIZE
}

/// Total page count: ceiling division of the match count by the page size.
pub fn total_pages(total: i64) -> i64 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(offset(1), 0);
        assert_eq!(offset(2), 8);
        assert_eq!(offset(4), 24);
    }

    #[test]
    fn out_of_range_page_clamps_to_first() {
        assert_eq!(offset(0), 0);
        assert_eq!(offset(-3), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(8), 1);
        assert_eq!(total_pages(9), 2);
        assert_eq!(total_pages(17), 3);
    }
}
