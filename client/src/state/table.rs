//! List state for one searchable, paginated record table.
//!
//! DESIGN
//! ======
//! The table keeps the full fetched collection and derives the visible page
//! from `query` + `page` on every read, so search, paging, and deletes never
//! have to patch a second copy of the rows. A load failure replaces the table
//! (`error`); a delete failure leaves rows untouched and raises `notice`.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use records::page::{self, Page};
use records::{ApiError, Entity, search};

pub const DELETE_FAILED_MESSAGE: &str = "Nepodařilo se smazat záznam.";

#[derive(Clone, Debug, PartialEq)]
pub struct TableState<T> {
    pub rows: Vec<T>,
    pub query: String,
    pub page: usize,
    pub per_page: usize,
    pub loading: bool,
    /// Set once the initial fetch has been issued for this mount.
    pub requested: bool,
    pub error: Option<&'static str>,
    pub notice: Option<&'static str>,
    /// Bumped on every raised notice so a stale timer cannot dismiss a newer one.
    pub notice_generation: u64,
}

impl<T: Entity> Default for TableState<T> {
    fn default() -> Self {
        Self::new(page::DEFAULT_PAGE_SIZE)
    }
}

impl<T: Entity> TableState<T> {
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            rows: Vec::new(),
            query: String::new(),
            page: 1,
            per_page: per_page.max(1),
            loading: true,
            requested: false,
            error: None,
            notice: None,
            notice_generation: 0,
        }
    }

    pub fn begin_load(&mut self) {
        self.requested = true;
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. `failure` is the page-specific load message.
    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>, failure: &'static str) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                self.page = page::clamp_page(self.page, self.total_pages());
            }
            Err(_) => self.error = Some(failure),
        }
    }

    /// Replace the search query and jump back to the first page.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&T> {
        search::filter(&self.rows, &self.query)
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        page::total_pages(self.filtered().len(), self.per_page)
    }

    /// Rows visible on the current page, cloned for rendering.
    #[must_use]
    pub fn page_view(&self) -> Page<T> {
        let filtered = self.filtered();
        let view = page::paginate(&filtered, self.page, self.per_page);
        Page {
            items: view.items.into_iter().cloned().collect(),
            page: view.page,
            total_pages: view.total_pages,
            total_items: view.total_items,
        }
    }

    pub fn next_page(&mut self) {
        self.page = page::clamp_page(self.page + 1, self.total_pages());
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Drop a row after the server confirmed the delete.
    pub fn remove(&mut self, id: i64) {
        self.rows.retain(|row| row.id() != id);
        self.notice = None;
        self.page = page::clamp_page(self.page, self.total_pages());
    }

    /// Record a failed delete; rows stay as they were. Returns the notice
    /// generation for `expire_notice`.
    pub fn delete_failed(&mut self) -> u64 {
        self.notice_generation += 1;
        self.notice = Some(DELETE_FAILED_MESSAGE);
        self.notice_generation
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Timed dismissal: only clears the notice raised as `generation`.
    pub fn expire_notice(&mut self, generation: u64) {
        if self.notice_generation == generation {
            self.notice = None;
        }
    }
}
