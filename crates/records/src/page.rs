//! Pagination over an already-filtered sequence.
//!
//! Pages are a pure derived slice: re-filtering recomputes the subset
//! and the current page index is clamped so the view stays stable when
//! the result shrinks.

/// Rows per page on the listing tables.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `total` items.
///
/// An empty result still renders one (empty) page.
pub fn page_count(total: usize, size: usize) -> usize {
    if size == 0 || total == 0 {
        return 1;
    }
    total.div_ceil(size)
}

/// Clamp a zero-based page index into range for `total` items.
pub fn clamp_page(index: usize, total: usize, size: usize) -> usize {
    index.min(page_count(total, size) - 1)
}

/// The slice of `items` visible on the given zero-based page.
pub fn slice<T>(items: &[T], index: usize, size: usize) -> &[T] {
    if size == 0 {
        return items;
    }
    let start = index.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(7, 5), 2);
        assert_eq!(page_count(11, 5), 3);
    }

    #[test]
    fn test_slice_full_and_partial_pages() {
        let items: Vec<u32> = (1..=7).collect();

        assert_eq!(slice(&items, 0, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(slice(&items, 1, 5), &[6, 7]);
    }

    #[test]
    fn test_slice_out_of_range_page_is_empty() {
        let items: Vec<u32> = (1..=7).collect();
        assert!(slice(&items, 5, 5).is_empty());
    }

    #[test]
    fn test_clamp_page_when_result_shrinks() {
        // On page 2 of 11 items, then a narrower filter leaves 3.
        assert_eq!(clamp_page(2, 11, 5), 2);
        assert_eq!(clamp_page(2, 3, 5), 0);
        assert_eq!(clamp_page(0, 0, 5), 0);
    }

    #[test]
    fn test_slice_is_stable_under_refilter() {
        let items: Vec<u32> = (1..=12).collect();
        let page = clamp_page(1, items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(slice(&items, page, DEFAULT_PAGE_SIZE), &[6, 7, 8, 9, 10]);

        let narrowed: Vec<u32> = items.iter().copied().filter(|n| *n <= 4).collect();
        let page = clamp_page(page, narrowed.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(slice(&narrowed, page, DEFAULT_PAGE_SIZE), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_size_returns_everything() {
        let items: Vec<u32> = (1..=3).collect();
        assert_eq!(slice(&items, 0, 0), &[1, 2, 3]);
        assert_eq!(page_count(3, 0), 1);
    }
}
