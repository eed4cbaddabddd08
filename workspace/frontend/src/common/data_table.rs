//! The paging/search/loading controller behind every list view.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use common::{ListState, Page, PageQuery, PaginationState, RequestSequence};
use yew::prelude::*;

type BoxedFetch<T> =
    Rc<dyn Fn(PageQuery) -> Pin<Box<dyn Future<Output = Result<Page<T>, String>>>>>;

/// Handle returned by [`use_data_table`].
pub struct UseDataTableHandle<T: Clone + 'static> {
    list: UseStateHandle<ListState<T>>,
    pagination: UseStateHandle<PaginationState>,
    search: UseStateHandle<String>,
    refresh_tick: UseStateHandle<u64>,
}

impl<T: Clone + 'static> Clone for UseDataTableHandle<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            pagination: self.pagination.clone(),
            search: self.search.clone(),
            refresh_tick: self.refresh_tick.clone(),
        }
    }
}

impl<T: Clone + 'static> UseDataTableHandle<T> {
    pub fn items(&self) -> Vec<T> {
        self.list.items.clone()
    }

    pub fn loading(&self) -> bool {
        self.list.loading
    }

    pub fn total_records(&self) -> u64 {
        self.list.total_records
    }

    pub fn page(&self) -> u64 {
        self.pagination.page
    }

    pub fn per_page(&self) -> u64 {
        self.pagination.per_page
    }

    /// Zero-based offset of the first displayed row.
    pub fn first(&self) -> u64 {
        self.pagination.first()
    }

    pub fn search_query(&self) -> String {
        (*self.search).clone()
    }

    /// Pager event: jump to the page containing row `first`, showing `rows`
    /// rows per page.
    pub fn on_page_change(&self) -> Callback<(u64, u64)> {
        let pagination = self.pagination.clone();
        Callback::from(move |(first, rows): (u64, u64)| {
            pagination.set((*pagination).apply_page_change(first, rows));
        })
    }

    /// Convenience pager event when the page size is fixed.
    pub fn go_to_page(&self) -> Callback<u64> {
        let pagination = self.pagination.clone();
        Callback::from(move |page: u64| {
            let current = *pagination;
            pagination.set(current.apply_page_change(
                (page.max(1) - 1) * current.per_page,
                current.per_page,
            ));
        })
    }

    pub fn set_search(&self) -> Callback<String> {
        let search = self.search.clone();
        Callback::from(move |query: String| search.set(query))
    }

    /// Re-runs the current fetch without moving the cursor. Used after
    /// create/update/delete to resynchronize with the backend.
    pub fn refresh(&self) -> Callback<()> {
        let refresh_tick = self.refresh_tick.clone();
        Callback::from(move |_| refresh_tick.set(*refresh_tick + 1))
    }
}

/// Owns the paging/search/loading lifecycle for a list view.
///
/// `fetch` runs on mount and whenever page, page size or search change;
/// `refresh()` re-runs it in place. The latest `fetch`/`on_error` closures
/// are pinned in mutable holders updated every render, so the effect always
/// calls the current version without re-triggering itself. Each run takes a
/// token from a [`RequestSequence`]; a response that resolves after a newer
/// request has started is discarded instead of overwriting fresher state.
#[hook]
pub fn use_data_table<T, F, Fut>(
    fetch: F,
    on_error: Option<Callback<String>>,
) -> UseDataTableHandle<T>
where
    T: Clone + 'static,
    F: Fn(PageQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, String>> + 'static,
{
    let list = use_state(ListState::<T>::default);
    let pagination = use_state(PaginationState::default);
    let search = use_state(String::new);
    let refresh_tick = use_state(|| 0u64);
    let sequence = use_mut_ref(RequestSequence::default);

    let fetch: BoxedFetch<T> = Rc::new(
        move |query| -> Pin<Box<dyn Future<Output = Result<Page<T>, String>>>> {
            Box::pin(fetch(query))
        },
    );
    let fetch_ref = use_mut_ref(|| fetch.clone());
    *fetch_ref.borrow_mut() = fetch;
    let on_error_ref = use_mut_ref(|| on_error.clone());
    *on_error_ref.borrow_mut() = on_error;

    {
        let list = list.clone();
        let pagination = pagination.clone();
        let deps = (
            pagination.page,
            pagination.per_page,
            (*search).clone(),
            *refresh_tick,
        );
        use_effect_with(deps, move |(page, per_page, search, _)| {
            let token = sequence.borrow_mut().begin();
            let query = PageQuery {
                page: *page,
                per_page: *per_page,
                search: (!search.is_empty()).then(|| search.clone()),
            };
            let fetch = fetch_ref.borrow().clone();

            let mut next = (*list).clone();
            next.start();
            list.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch(query).await;
                if !sequence.borrow().is_current(token) {
                    log::debug!("Discarding superseded list response");
                    return;
                }

                let mut next = (*list).clone();
                match result {
                    Ok(page) => {
                        pagination.set((*pagination).with_total(page.total));
                        next.finish(page);
                    }
                    Err(error) => {
                        log::error!("List fetch failed: {error}");
                        next.fail();
                        if let Some(on_error) = on_error_ref.borrow().as_ref() {
                            on_error.emit(error);
                        }
                    }
                }
                list.set(next);
            });

            || ()
        });
    }

    UseDataTableHandle {
        list,
        pagination,
        search,
        refresh_tick,
    }
}
