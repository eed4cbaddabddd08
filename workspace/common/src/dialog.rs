//! Draft state for create/edit dialogs.

/// Owns "is the dialog open, and what is its draft content".
///
/// The draft always starts from a clone of the template, and closing resets
/// back to it, so no stale edit ever leaks into the next create invocation.
/// The draft is never the same object as a row in the displayed list — rows
/// enter only by value through [`open_edit`](Self::open_edit).
#[derive(Debug, Clone, PartialEq)]
pub struct DialogState<T: Clone> {
    template: T,
    pub show: bool,
    pub draft: T,
    editing_id: Option<i64>,
}

impl<T: Clone> DialogState<T> {
    pub fn new(template: T) -> Self {
        let draft = template.clone();
        Self {
            template,
            show: false,
            draft,
            editing_id: None,
        }
    }

    /// Opens in create mode with a fresh draft from the template.
    pub fn open_create(&mut self) {
        self.editing_id = None;
        self.draft = self.template.clone();
        self.show = true;
    }

    /// Opens in edit mode with the item's values as the draft.
    pub fn open_edit(&mut self, id: i64, draft: T) {
        self.editing_id = Some(id);
        self.draft = draft;
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
        self.editing_id = None;
        self.draft = self.template.clone();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn update(&mut self, apply: impl FnOnce(&mut T)) {
        apply(&mut self.draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Draft {
        name: String,
    }

    #[test]
    fn open_edit_tracks_the_item() {
        let mut dialog = DialogState::new(Draft::default());
        dialog.open_edit(
            5,
            Draft {
                name: "Leon".into(),
            },
        );
        assert!(dialog.show);
        assert!(dialog.is_editing());
        assert_eq!(dialog.editing_id(), Some(5));
        assert_eq!(dialog.draft.name, "Leon");
    }

    #[test]
    fn open_create_resets_to_template() {
        let mut dialog = DialogState::new(Draft {
            name: "template".into(),
        });
        dialog.open_edit(5, Draft { name: "edit".into() });
        dialog.open_create();

        assert!(!dialog.is_editing());
        assert_eq!(dialog.draft.name, "template");
    }

    #[test]
    fn close_discards_the_draft() {
        let mut dialog = DialogState::new(Draft::default());
        dialog.open_create();
        dialog.update(|draft| draft.name = "half-typed".into());
        dialog.close();

        assert!(!dialog.show);
        assert_eq!(dialog.draft, Draft::default());

        dialog.open_create();
        assert_eq!(dialog.draft, Draft::default());
    }

    #[test]
    fn update_mutates_only_the_draft() {
        let mut dialog = DialogState::new(Draft::default());
        dialog.open_create();
        dialog.update(|draft| draft.name = "x".into());
        assert_eq!(dialog.draft.name, "x");

        dialog.open_create();
        assert_eq!(dialog.draft.name, "");
    }
}
