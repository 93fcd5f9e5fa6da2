// ============================================================================
// PAGINATION - Client-side paging for list views
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    /// 1-based
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn first(size: usize) -> Self {
        Self { number: 1, size: size.max(1) }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size).max(1)
    }

    /// Clamp into range after the row count shrinks (e.g. after a delete)
    pub fn clamped(self, total: usize) -> Self {
        Self {
            number: self.number.clamp(1, self.page_count(total)),
            ..self
        }
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.number - 1).saturating_mul(self.size).min(rows.len());
        let end = start.saturating_add(self.size).min(rows.len());
        &rows[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.number < self.page_count(total)
    }

    pub fn previous(self) -> Self {
        Self {
            number: self.number.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn next(self, total: usize) -> Self {
        Self {
            number: (self.number + 1).min(self.page_count(total)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_ten_per_page() {
        let rows: Vec<u32> = (1..=23).collect();
        let page = Page::first(10);
        assert_eq!(page.page_count(rows.len()), 3);
        assert_eq!(page.slice(&rows).len(), 10);
        let last = page.next(23).next(23).next(23);
        assert_eq!(last.number, 3);
        assert_eq!(last.slice(&rows), &[21, 22, 23]);
        assert!(!last.has_next(23));
        assert!(last.has_previous());
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let page = Page::first(10);
        assert_eq!(page.page_count(0), 1);
        assert!(page.slice::<u32>(&[]).is_empty());
    }

    #[test]
    fn shrinking_list_pulls_page_back() {
        let page = Page { number: 3, size: 10 };
        assert_eq!(page.clamped(20).number, 2);
        assert_eq!(page.previous().previous().previous().number, 1);
    }
}
