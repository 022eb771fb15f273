//! Pagination bookkeeping for the list views.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

/// Page sizes the size selector offers.
pub const PAGE_SIZES: [i64; 3] = [10, 20, 50];

const DEFAULT_SIZE: i64 = 10;

/// Current page index, page size, and the server-reported page count.
///
/// `total_pages` starts at 0 (nothing loaded yet) and is updated from
/// each `Page` response via [`Pager::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: i64,
    pub size: i64,
    pub total_pages: i64,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_SIZE,
            total_pages: 0,
        }
    }
}

impl Pager {
    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Step back one page; clamped at 0.
    pub fn prev(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    /// Step forward one page; clamped at the last known page.
    pub fn next(&mut self) {
        if self.can_next() {
            self.page += 1;
        }
    }

    /// Change the page size. Sizes outside [`PAGE_SIZES`] are ignored.
    /// Any accepted change resets the page index to 0 so the view never
    /// lands past the end of the re-sliced result set.
    pub fn set_size(&mut self, size: i64) {
        if !PAGE_SIZES.contains(&size) || size == self.size {
            return;
        }
        self.size = size;
        self.page = 0;
    }

    /// Reset to the first page. Called whenever a filter changes.
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    /// Record the page count from a response, clamping the current page
    /// if the result set shrank beneath it (e.g. after a delete removed
    /// the last item of the last page).
    pub fn apply(&mut self, total_pages: i64) {
        self.total_pages = total_pages.max(0);
        if self.total_pages > 0 && self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
        if self.total_pages == 0 {
            self.page = 0;
        }
    }

    /// Human page indicator, 1-based: `Page 2 / 3`.
    pub fn label(&self) -> String {
        format!("Page {} / {}", self.page + 1, self.total_pages.max(1))
    }
}
