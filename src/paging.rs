//! Client-Side Pagination
//!
//! Pure page arithmetic for the board list. The full entry set lives in
//! memory; only the visible slice changes with the page number. Pages are
//! 1-based to match what the user sees.

/// Entries per page on the board list
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` entries (0 for an empty list)
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Whether a "Previous" control should be enabled on `page`
pub fn has_prev(page: usize) -> bool {
    page > 1
}

/// Whether a "Next" control should be enabled on `page` of `pages` total
pub fn has_next(page: usize, pages: usize) -> bool {
    page < pages
}

/// The half-open index range [(page-1)*size, page*size) clamped to `total`
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    let start = (page.saturating_sub(1) * page_size).min(total);
    let end = (start + page_size).min(total);
    (start, end)
}

/// The entries visible on `page`
pub fn page_slice<T: Clone>(entries: &[T], page: usize, page_size: usize) -> Vec<T> {
    let (start, end) = page_bounds(page, page_size, entries.len());
    entries[start..end].to_vec()
}
