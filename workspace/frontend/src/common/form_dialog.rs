//! Create/edit dialog state for resource forms.

use common::DialogState;
use yew::prelude::*;

/// Handle returned by [`use_form_dialog`].
pub struct UseFormDialogHandle<T: Clone + 'static> {
    state: UseStateHandle<DialogState<T>>,
}

impl<T: Clone + 'static> Clone for UseFormDialogHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

// Dialog handles appear in component props; equality is draft/visibility
// equality so prop diffing re-renders exactly when the dialog changed.
impl<T: Clone + PartialEq + 'static> PartialEq for UseFormDialogHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

impl<T: Clone + 'static> UseFormDialogHandle<T> {
    pub fn show(&self) -> bool {
        self.state.show
    }

    pub fn draft(&self) -> T {
        self.state.draft.clone()
    }

    /// True iff the dialog tracks an existing record.
    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.state.editing_id()
    }

    pub fn open_create(&self) {
        let mut next = (*self.state).clone();
        next.open_create();
        self.state.set(next);
    }

    pub fn open_edit(&self, id: i64, draft: T) {
        let mut next = (*self.state).clone();
        next.open_edit(id, draft);
        self.state.set(next);
    }

    pub fn close(&self) {
        let mut next = (*self.state).clone();
        next.close();
        self.state.set(next);
    }

    pub fn on_close(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |_| handle.close())
    }

    /// Applies a field edit to the draft.
    pub fn update(&self, apply: impl FnOnce(&mut T)) {
        let mut next = (*self.state).clone();
        next.update(apply);
        self.state.set(next);
    }
}

/// Owns "is a create/edit dialog open, and what is its draft content".
///
/// The template is captured on first render; `open_create` resets the draft
/// to it, `open_edit` replaces the draft with the item's values, and closing
/// always restores the template so no stale draft leaks into the next
/// create.
#[hook]
pub fn use_form_dialog<T: Clone + 'static>(template: T) -> UseFormDialogHandle<T> {
    let state = use_state(|| DialogState::new(template));
    UseFormDialogHandle { state }
}
