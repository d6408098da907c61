/// Rows shown per page by the raw data viewer.
pub const PAGE_SIZE: usize = 5;

/// Walks a slice `PAGE_SIZE` rows at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPager {
    offset: usize,
    page_size: usize,
}

impl Default for RowPager {
    fn default() -> Self {
        Self::new()
    }
}

impl RowPager {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// A zero page size is bumped to 1 so the pager always advances.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// Start at page `page` (0-based) instead of the beginning.
    pub fn at_page(page: usize) -> Self {
        let mut pager = Self::new();
        pager.offset = page.saturating_mul(pager.page_size);
        pager
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.offset < total
    }

    /// Rows `[offset, min(offset + page_size, len))`, then advance.
    /// `None` once the offset has reached the end.
    pub fn next_page<'a, T>(&mut self, rows: &'a [T]) -> Option<&'a [T]> {
        if !self.has_more(rows.len()) {
            return None;
        }
        let end = (self.offset + self.page_size).min(rows.len());
        let page = &rows[self.offset..end];
        self.offset = end;
        Some(page)
    }
}
