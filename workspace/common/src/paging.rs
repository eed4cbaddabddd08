//! Pagination primitives for the data-table hook and its API adapters.

/// Parameters handed to a list fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub per_page: u64,
    pub search: Option<String>,
}

/// One page of a listing plus the backend's total count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// The paging cursor owned by a list view. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: u64,
    pub per_page: u64,
    pub total_records: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            total_records: 0,
        }
    }
}

impl PaginationState {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page,
            total_records: 0,
        }
    }

    /// Zero-based offset of the first row on the current page.
    pub fn first(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.per_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_records.div_ceil(self.per_page.max(1))
    }

    /// Applies a pager event expressed as (offset of first row, rows per page).
    pub fn apply_page_change(self, first: u64, rows: u64) -> Self {
        let rows = rows.max(1);
        Self {
            page: first / rows + 1,
            per_page: rows,
            ..self
        }
    }

    pub fn with_total(self, total_records: u64) -> Self {
        Self {
            total_records,
            ..self
        }
    }
}

/// Pages and searches client-side over an unpaged listing, so endpoints that
/// return their full collection still drive the same table contract.
pub fn paginate_locally<T, F>(items: &[T], query: &PageQuery, matches: F) -> Page<T>
where
    T: Clone,
    F: Fn(&T, &str) -> bool,
{
    let filtered: Vec<&T> = match query.search.as_deref().map(str::trim) {
        Some(needle) if !needle.is_empty() => {
            items.iter().filter(|item| matches(item, needle)).collect()
        }
        _ => items.iter().collect(),
    };

    let total = filtered.len() as u64;
    let per_page = query.per_page.max(1) as usize;
    let start = (query.page.saturating_sub(1) as usize) * per_page;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();

    Page { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_is_zero_based_offset() {
        let cursor = PaginationState::new(3, 10);
        assert_eq!(cursor.first(), 20);
        assert_eq!(PaginationState::default().first(), 0);
    }

    #[test]
    fn page_change_recovers_page_from_offset() {
        let cursor = PaginationState::default().apply_page_change(40, 20);
        assert_eq!(cursor.page, 3);
        assert_eq!(cursor.per_page, 20);
    }

    #[test]
    fn page_change_keeps_total() {
        let cursor = PaginationState::default()
            .with_total(99)
            .apply_page_change(10, 10);
        assert_eq!(cursor.total_records, 99);
        assert_eq!(cursor.page, 2);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PaginationState::new(1, 10).with_total(21).total_pages(), 3);
        assert_eq!(PaginationState::new(1, 10).with_total(0).total_pages(), 0);
    }

    fn query(page: u64, per_page: u64, search: Option<&str>) -> PageQuery {
        PageQuery {
            page,
            per_page,
            search: search.map(str::to_string),
        }
    }

    #[test]
    fn local_paging_slices() {
        let items: Vec<u64> = (0..25).collect();
        let page = paginate_locally(&items, &query(2, 10, None), |_, _| true);
        assert_eq!(page.items, (10..20).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
    }

    #[test]
    fn local_paging_filters_before_slicing() {
        let items = vec!["anna", "bruno", "anselmo", "carla"];
        let page = paginate_locally(&items, &query(1, 10, Some("an")), |item, needle| {
            item.contains(needle)
        });
        assert_eq!(page.items, vec!["anna", "anselmo"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn local_paging_ignores_blank_search() {
        let items = vec![1, 2, 3];
        let page = paginate_locally(&items, &query(1, 10, Some("   ")), |_, _| false);
        assert_eq!(page.total, 3);
    }
}
