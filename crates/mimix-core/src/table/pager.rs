//! Client-side pagination over a fetched collection.

/// Fixed number of rows per page.
pub const PAGE_SIZE: usize = 8;

/// View model for the pagination strip.
///
/// Rendered only when there is more than one page: a previous button
/// (disabled on the first page), one numbered button per page with the
/// current page marked active, and a next button (disabled on the last).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStrip {
    pub prev_enabled: bool,
    pub pages: Vec<PageButton>,
    pub next_enabled: bool,
}

/// A single numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Number of pages needed for `total_items` rows.
pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE)
}

/// Half-open index window `[(page-1)*8, page*8)` for a 1-based page,
/// clamped to the collection length.
pub fn window(page: usize, total_items: usize) -> (usize, usize) {
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_items);
    (start.min(total_items), end)
}

/// Build the strip for the current page, or `None` when a single page
/// (or none) holds everything.
pub fn strip(page: usize, total_items: usize) -> Option<PageStrip> {
    let total = total_pages(total_items);
    if total <= 1 {
        return None;
    }

    let pages = (1..=total)
        .map(|number| PageButton {
            number,
            active: number == page,
        })
        .collect();

    Some(PageStrip {
        prev_enabled: page > 1,
        pages,
        next_enabled: page < total,
    })
}
