use yew::prelude::*;

use crate::api_client::category::CategoryPayload;
use crate::common::form_dialog::UseFormDialogHandle;
use crate::components::common::forms::{input_value, opt};

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub dialog: UseFormDialogHandle<CategoryPayload>,
    pub saving: bool,
    pub on_save: Callback<()>,
}

#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    let dialog = &props.dialog;
    let draft = dialog.draft();

    let (title, button_text) = if dialog.is_editing() {
        ("Edit Category", "Update Category")
    } else {
        ("Add Category", "Create Category")
    };

    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    let on_cancel = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.close())
    };

    let on_name = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.name = value);
        })
    };

    let on_slug = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.slug = value);
        })
    };

    let on_description = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.description = opt(value));
        })
    };

    html! {
        <dialog class={classes!("modal", dialog.show().then_some("modal-open"))}>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            type="text"
                            placeholder="e.g. Prints"
                            class="input input-bordered w-full"
                            value={draft.name.clone()}
                            oninput={on_name}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Slug"}</span>
                        </label>
                        <input
                            type="text"
                            placeholder="e.g. prints"
                            class="input input-bordered w-full"
                            value={draft.slug.clone()}
                            oninput={on_slug}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Description (optional)"}</span>
                        </label>
                        <input
                            type="text"
                            placeholder="e.g. Art prints and posters"
                            class="input input-bordered w-full"
                            value={draft.description.clone().unwrap_or_default()}
                            oninput={on_description}
                        />
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn"
                            onclick={on_cancel}
                            disabled={props.saving}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={props.saving}
                        >
                            if props.saving {
                                <span class="loading loading-spinner"></span>
                            }
                            {button_text}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
