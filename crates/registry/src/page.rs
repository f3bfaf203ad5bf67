use shared_types::PaginationMeta;

/// A 0-indexed page over a filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
}

impl PageWindow {
    /// A window on the first page. A zero size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The records `[page * size, page * size + size)` of `items`, clipped.
    pub fn slice<'a, U>(&self, items: &'a [U]) -> &'a [U] {
        let start = self.page.saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn meta(&self, total: usize) -> PaginationMeta {
        PaginationMeta::new(self.page, self.page_size, total)
    }

    /// Jump to `page`, clamped to the last page of `total` records.
    pub fn set_page(&mut self, page: usize, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page = page.min(last);
    }

    /// Change the page size. Always returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn next(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Pull the page back inside range after the collection shrank.
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_ten_by_five() {
        let items: Vec<u32> = (0..10).collect();
        let mut w = PageWindow::new(5);
        w.set_page(1, items.len());
        assert_eq!(w.slice(&items), &[5, 6, 7, 8, 9]);
    }

    #[test]
    fn set_page_size_resets_page() {
        let mut w = PageWindow::new(5);
        w.set_page(1, 10);
        w.set_page_size(10);
        assert_eq!(w.page(), 0);
        assert_eq!(w.page_size(), 10);
    }

    #[test]
    fn partial_last_page_and_out_of_range_slice() {
        let items: Vec<u32> = (0..7).collect();
        let mut w = PageWindow::new(5);
        w.next(items.len());
        assert_eq!(w.slice(&items), &[5, 6]);
        w.next(items.len());
        assert_eq!(w.page(), 1);

        let empty: Vec<u32> = Vec::new();
        assert!(w.slice(&empty).is_empty());
    }

    #[test]
    fn clamp_after_shrink() {
        let mut w = PageWindow::new(5);
        w.set_page(2, 15);
        w.clamp(6);
        assert_eq!(w.page(), 1);
        w.clamp(0);
        assert_eq!(w.page(), 0);
    }

    #[test]
    fn zero_page_size_is_bumped() {
        let w = PageWindow::new(0);
        assert_eq!(w.page_size(), 1);
        assert_eq!(w.page_count(3), 3);
    }
}
