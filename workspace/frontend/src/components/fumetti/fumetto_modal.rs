use yew::prelude::*;

use crate::api_client::fumetto::FumettoPayload;
use crate::common::form_dialog::UseFormDialogHandle;
use crate::components::common::forms::{input_value, lines_to_vec, opt, parse_i64, textarea_value};

#[derive(Properties, PartialEq)]
pub struct FumettoModalProps {
    pub dialog: UseFormDialogHandle<FumettoPayload>,
    pub saving: bool,
    pub on_save: Callback<()>,
}

#[function_component(FumettoModal)]
pub fn fumetto_modal(props: &FumettoModalProps) -> Html {
    let dialog = &props.dialog;
    let draft = dialog.draft();

    let (title, button_text) = if dialog.is_editing() {
        ("Edit Fumetto", "Update Fumetto")
    } else {
        ("Add Fumetto", "Create Fumetto")
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

    let on_title = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.title = value);
        })
    };

    let on_slug = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.slug = opt(value));
        })
    };

    let on_description = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            dialog.update(|draft| draft.description = opt(value));
        })
    };

    let on_about = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            dialog.update(|draft| draft.about = opt(value));
        })
    };

    let on_cover = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.cover_image = opt(value));
        })
    };

    let on_pages = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            dialog.update(|draft| draft.pages = lines_to_vec(&value));
        })
    };

    let on_order = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| {
                draft.order = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_i64(&value) as i32)
                }
            });
        })
    };

    html! {
        <dialog class={classes!("modal", dialog.show().then_some("modal-open"))}>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{title}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Title"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={draft.title.clone()}
                            oninput={on_title}
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Slug (optional)"}</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                value={draft.slug.clone().unwrap_or_default()}
                                oninput={on_slug}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Display order"}</span>
                            </label>
                            <input
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                value={draft.order.map(|o| o.to_string()).unwrap_or_default()}
                                oninput={on_order}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Description"}</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full"
                            rows="2"
                            value={draft.description.clone().unwrap_or_default()}
                            oninput={on_description}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"About"}</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full"
                            rows="3"
                            value={draft.about.clone().unwrap_or_default()}
                            oninput={on_about}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Cover image URL"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={draft.cover_image.clone().unwrap_or_default()}
                            oninput={on_cover}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Page images (one URL per line, reading order)"}</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full font-mono text-sm"
                            rows="5"
                            value={draft.pages.join("\n")}
                            oninput={on_pages}
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
