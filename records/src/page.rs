//! Client-side pagination over filtered rows.
//!
//! Pages are 1-based. An empty list still has one (empty) page so the
//! "page X of Y" label never reads "of 0".

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page worth of rows plus navigation bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[must_use]
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice `rows` to the requested page, clamping `page` into range.
#[must_use]
pub fn paginate<T: Clone>(rows: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(rows.len(), per_page);
    let page = clamp_page(page, total_pages);
    let start = (page - 1) * per_page;
    let items = rows.iter().skip(start).take(per_page).cloned().collect();
    Page { items, page, total_pages, total_items: rows.len() }
}
