//! One cohesive interface over the list, dialog and toast concerns every
//! admin page repeats.

use std::future::Future;

use common::{Page, PageQuery};
use yew::prelude::*;

use super::data_table::{use_data_table, UseDataTableHandle};
use super::form_dialog::{use_form_dialog, UseFormDialogHandle};
use super::toast::ToastContext;

/// Composed controller for a CRUD resource page: the paged listing, the
/// create/edit dialog draft, and the page's notification channel.
pub struct ResourceController<T: Clone + 'static, D: Clone + 'static> {
    pub table: UseDataTableHandle<T>,
    pub dialog: UseFormDialogHandle<D>,
    pub toast: ToastContext,
}

impl<T: Clone + 'static, D: Clone + 'static> Clone for ResourceController<T, D> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            dialog: self.dialog.clone(),
            toast: self.toast.clone(),
        }
    }
}

impl<T: Clone + 'static, D: Clone + 'static> ResourceController<T, D> {
    /// After a successful save: toast, close the dialog, refetch the list.
    /// The list is refetched rather than mutated locally, so the table keeps
    /// showing the backend's view.
    pub fn saved(&self, summary: &str) {
        self.toast.show_success(summary);
        self.dialog.close();
        self.table.refresh().emit(());
    }

    pub fn save_failed(&self, summary: &str, error: &str) {
        self.toast.show_error_detail(summary, error);
    }

    /// After a successful delete/restore style mutation: toast and refetch.
    pub fn mutated(&self, summary: &str) {
        self.toast.show_success(summary);
        self.table.refresh().emit(());
    }

    pub fn mutation_failed(&self, summary: &str, error: &str) {
        self.toast.show_error_detail(summary, error);
    }
}

/// Composes [`use_data_table`], [`use_form_dialog`] and the toast context
/// behind one handle. List-load errors surface as error toasts.
#[hook]
pub fn use_resource_controller<T, D, F, Fut>(fetch: F, template: D) -> ResourceController<T, D>
where
    T: Clone + 'static,
    D: Clone + 'static,
    F: Fn(PageQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, String>> + 'static,
{
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");

    let on_error = {
        let toast = toast.clone();
        Callback::from(move |error: String| {
            toast.show_error_detail("Failed to load data", error);
        })
    };

    let table = use_data_table(fetch, Some(on_error));
    let dialog = use_form_dialog(template);

    ResourceController {
        table,
        dialog,
        toast,
    }
}
