use yew::prelude::*;

use super::view::ProductDraft;
use crate::common::form_dialog::UseFormDialogHandle;
use crate::components::common::forms::{input_value, parse_f64, select_value, textarea_value};

#[derive(Properties, PartialEq)]
pub struct ProductModalProps {
    pub dialog: UseFormDialogHandle<ProductDraft>,
    pub saving: bool,
    pub on_save: Callback<()>,
}

#[function_component(ProductModal)]
pub fn product_modal(props: &ProductModalProps) -> Html {
    let dialog = &props.dialog;
    let draft = dialog.draft();

    let (title, button_text) = if dialog.is_editing() {
        ("Edit Product", "Update Product")
    } else {
        ("Add Product", "Create Product")
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
            dialog.update(|draft| draft.slug = value);
        })
    };

    let on_short_description = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.short_description = value);
        })
    };

    let on_sku = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.sku = value);
        })
    };

    let on_gtin = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.gtin = value);
        })
    };

    let on_currency = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e).to_uppercase();
            dialog.update(|draft| draft.currency = value);
        })
    };

    let on_character = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.character_value = value);
        })
    };

    let on_etsy_link = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.etsy_link = value);
        })
    };

    let on_long_description = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            dialog.update(|draft| draft.long_description = value);
        })
    };

    let on_price = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = parse_f64(&input_value(&e));
            dialog.update(|draft| draft.base_price = value);
        })
    };

    let on_status = {
        let dialog = dialog.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            dialog.update(|draft| draft.status = value);
        })
    };

    html! {
        <dialog class={classes!("modal", dialog.show().then_some("modal-open"))}>
            <div class="modal-box max-w-3xl">
                <h3 class="font-bold text-lg">{title}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="grid grid-cols-2 gap-4">
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
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Slug (lowercase, hyphens)"}</span>
                            </label>
                            <input
                                type="text"
                                placeholder="e.g. leon-art-print"
                                class="input input-bordered w-full font-mono"
                                value={draft.slug.clone()}
                                oninput={on_slug}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Short description"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={draft.short_description.clone()}
                            oninput={on_short_description}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Long description"}</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full"
                            rows="4"
                            value={draft.long_description.clone()}
                            oninput={on_long_description}
                        />
                    </div>

                    <div class="grid grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Base price"}</span>
                            </label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                class="input input-bordered w-full"
                                value={draft.base_price.to_string()}
                                oninput={on_price}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Currency"}</span>
                            </label>
                            <input
                                type="text"
                                maxlength="3"
                                class="input input-bordered w-full"
                                value={draft.currency.clone()}
                                oninput={on_currency}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Status"}</span>
                            </label>
                            <select class="select select-bordered w-full" onchange={on_status}>
                                <option value="draft" selected={draft.status == "draft"}>{"Draft"}</option>
                                <option value="published" selected={draft.status == "published"}>{"Published"}</option>
                                <option value="archived" selected={draft.status == "archived"}>{"Archived"}</option>
                            </select>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"SKU"}</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full font-mono"
                                value={draft.sku.clone()}
                                oninput={on_sku}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"GTIN (optional)"}</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full font-mono"
                                value={draft.gtin.clone()}
                                oninput={on_gtin}
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Linked personaggio (optional)"}</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                value={draft.character_value.clone()}
                                oninput={on_character}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Etsy listing URL (optional)"}</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                value={draft.etsy_link.clone()}
                                oninput={on_etsy_link}
                            />
                        </div>
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
