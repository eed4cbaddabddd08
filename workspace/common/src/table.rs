//! List-fetch bookkeeping for the data-table hook.

use crate::paging::Page;

/// Monotonic token source for in-flight list requests.
///
/// Paging quickly can leave several requests in flight; without ordering, a
/// slow earlier response can land after a fresh one and overwrite it. Each
/// request takes a token from [`begin`](Self::begin), and only the response
/// holding the latest token may touch state — superseded responses are
/// dropped at resolution time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    /// Starts a new request, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.issued
    }
}

/// Items/total/loading triple displayed by a list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub total_records: u64,
    pub loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_records: 0,
            loading: true,
        }
    }
}

impl<T> ListState<T> {
    pub fn start(&mut self) {
        self.loading = true;
    }

    pub fn finish(&mut self, page: Page<T>) {
        self.items = page.items;
        self.total_records = page.total;
        self.loading = false;
    }

    /// The previous items stay on screen; only the spinner goes away.
    pub fn fail(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_page_is_applied() {
        let mut state = ListState::default();
        assert!(state.loading);

        state.finish(Page {
            items: vec![1, 2, 3],
            total: 3,
        });
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.total_records, 3);
        assert!(!state.loading);
    }

    #[test]
    fn failure_clears_loading_but_keeps_items() {
        let mut state = ListState::default();
        state.finish(Page {
            items: vec!["a"],
            total: 1,
        });

        state.start();
        assert!(state.loading);
        state.fail();
        assert!(!state.loading);
        assert_eq!(state.items, vec!["a"]);
    }

    #[test]
    fn later_request_supersedes_earlier_one() {
        let mut seq = RequestSequence::default();
        let slow = seq.begin();
        let fast = seq.begin();

        assert!(!seq.is_current(slow));
        assert!(seq.is_current(fast));
    }

    #[test]
    fn token_stays_current_until_next_begin() {
        let mut seq = RequestSequence::default();
        let only = seq.begin();
        assert!(seq.is_current(only));
    }
}
