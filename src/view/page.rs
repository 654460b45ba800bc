/// Number of pages needed for `count` rows; zero rows is zero pages
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Rows `[(page-1)*size, page*size)` clipped to bounds. Page is 1-based and is
/// not checked against the page count; out of range pages are simply empty.
pub fn paginate<T: Copy>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size).min(rows.len());
    let end = page.saturating_mul(page_size).min(rows.len());
    rows[start..end].to_vec()
}
