use yew::prelude::*;

use crate::api_client::personaggio::PersonaggioPayload;
use crate::common::form_dialog::UseFormDialogHandle;
use crate::components::common::forms::{
    input_value, lines_to_vec, opt, parse_i64, select_value, textarea_value,
};

#[derive(Properties, PartialEq)]
pub struct PersonaggioModalProps {
    pub dialog: UseFormDialogHandle<PersonaggioPayload>,
    pub saving: bool,
    pub on_save: Callback<()>,
}

#[function_component(PersonaggioModal)]
pub fn personaggio_modal(props: &PersonaggioModalProps) -> Html {
    let dialog = &props.dialog;
    let draft = dialog.draft();

    let (title, button_text) = if dialog.is_editing() {
        ("Edit Personaggio", "Update Personaggio")
    } else {
        ("Add Personaggio", "Create Personaggio")
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

    let on_description = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            dialog.update(|draft| draft.description = value);
        })
    };

    let on_icon = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.icon = opt(value));
        })
    };

    let on_images = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            dialog.update(|draft| draft.images = lines_to_vec(&value));
        })
    };

    let on_background_type = {
        let dialog = dialog.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            dialog.update(|draft| {
                draft.background_type = if value == "none" { None } else { Some(value) }
            });
        })
    };

    let on_background_color = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.background_color = opt(value));
        })
    };

    let on_gradient_from = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.gradient_from = opt(value));
        })
    };

    let on_gradient_to = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.gradient_to = opt(value));
        })
    };

    let on_background_image = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.background_image = opt(value));
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

    let background_type = draft.background_type.clone().unwrap_or_default();

    html! {
        <dialog class={classes!("modal", dialog.show().then_some("modal-open"))}>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{title}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            type="text"
                            placeholder="e.g. Leon"
                            class="input input-bordered w-full"
                            value={draft.name.clone()}
                            oninput={on_name}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Description"}</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full"
                            rows="3"
                            value={draft.description.clone()}
                            oninput={on_description}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Icon URL (optional)"}</span>
                        </label>
                        <input
                            type="text"
                            placeholder="https://... or /uploads/..."
                            class="input input-bordered w-full"
                            value={draft.icon.clone().unwrap_or_default()}
                            oninput={on_icon}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Gallery images (one URL per line, max 20)"}</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full font-mono text-sm"
                            rows="4"
                            value={draft.images.join("\n")}
                            oninput={on_images}
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Background type"}</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                onchange={on_background_type}
                            >
                                <option value="none" selected={background_type.is_empty()}>{"None"}</option>
                                <option value="solid" selected={background_type == "solid"}>{"Solid"}</option>
                                <option value="gradient" selected={background_type == "gradient"}>{"Gradient"}</option>
                                <option value="image" selected={background_type == "image"}>{"Image"}</option>
                            </select>
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

                    if background_type == "solid" {
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Background color"}</span>
                            </label>
                            <input
                                type="text"
                                placeholder="#1A2B3C"
                                class="input input-bordered w-full"
                                value={draft.background_color.clone().unwrap_or_default()}
                                oninput={on_background_color}
                            />
                        </div>
                    }

                    if background_type == "gradient" {
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{"Gradient from"}</span>
                                </label>
                                <input
                                    type="text"
                                    placeholder="#1A2B3C"
                                    class="input input-bordered w-full"
                                    value={draft.gradient_from.clone().unwrap_or_default()}
                                    oninput={on_gradient_from}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{"Gradient to"}</span>
                                </label>
                                <input
                                    type="text"
                                    placeholder="#C0FFEE"
                                    class="input input-bordered w-full"
                                    value={draft.gradient_to.clone().unwrap_or_default()}
                                    oninput={on_gradient_to}
                                />
                            </div>
                        </div>
                    }

                    if background_type == "image" {
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Background image URL"}</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                value={draft.background_image.clone().unwrap_or_default()}
                                oninput={on_background_image}
                            />
                        </div>
                    }

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
