use yew::prelude::*;

use crate::api_client::discount::DiscountPayload;
use crate::common::form_dialog::UseFormDialogHandle;
use crate::components::common::forms::{
    input_checked, input_value, opt, parse_f64, parse_i64, select_value,
};

#[derive(Properties, PartialEq)]
pub struct DiscountModalProps {
    pub dialog: UseFormDialogHandle<DiscountPayload>,
    pub saving: bool,
    pub on_save: Callback<()>,
}

#[function_component(DiscountModal)]
pub fn discount_modal(props: &DiscountModalProps) -> Html {
    let dialog = &props.dialog;
    let draft = dialog.draft();

    let (title, button_text) = if dialog.is_editing() {
        ("Edit Discount", "Update Discount")
    } else {
        ("Add Discount", "Create Discount")
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

    let on_code = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e).to_uppercase();
            dialog.update(|draft| draft.code = value);
        })
    };

    let on_type = {
        let dialog = dialog.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            dialog.update(|draft| draft.discount_type = value);
        })
    };

    let on_value = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = parse_f64(&input_value(&e));
            dialog.update(|draft| draft.value = value);
        })
    };

    let on_min_purchase = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let raw = input_value(&e);
            dialog.update(|draft| {
                draft.min_purchase = if raw.trim().is_empty() {
                    None
                } else {
                    Some(parse_f64(&raw))
                }
            });
        })
    };

    let on_max_uses = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let raw = input_value(&e);
            dialog.update(|draft| {
                draft.max_uses = if raw.trim().is_empty() {
                    None
                } else {
                    Some(parse_i64(&raw))
                }
            });
        })
    };

    let on_expires_at = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            dialog.update(|draft| draft.expires_at = opt(value));
        })
    };

    let on_active = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let checked = input_checked(&e);
            dialog.update(|draft| draft.active = checked);
        })
    };

    html! {
        <dialog class={classes!("modal", dialog.show().then_some("modal-open"))}>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Code"}</span>
                        </label>
                        <input
                            type="text"
                            placeholder="e.g. SUMMER25"
                            class="input input-bordered w-full font-mono"
                            value={draft.code.clone()}
                            oninput={on_code}
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Type"}</span>
                            </label>
                            <select class="select select-bordered w-full" onchange={on_type}>
                                <option value="percentage" selected={draft.discount_type == "percentage"}>
                                    {"Percentage"}
                                </option>
                                <option value="fixed_amount" selected={draft.discount_type == "fixed_amount"}>
                                    {"Fixed amount"}
                                </option>
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Value"}</span>
                            </label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                class="input input-bordered w-full"
                                value={draft.value.to_string()}
                                oninput={on_value}
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Minimum purchase (optional)"}</span>
                            </label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                class="input input-bordered w-full"
                                value={draft.min_purchase.map(|v| v.to_string()).unwrap_or_default()}
                                oninput={on_min_purchase}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Max uses (blank = unlimited)"}</span>
                            </label>
                            <input
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                value={draft.max_uses.map(|v| v.to_string()).unwrap_or_default()}
                                oninput={on_max_uses}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Expires at (RFC 3339, blank = never)"}</span>
                        </label>
                        <input
                            type="text"
                            placeholder="2026-12-31T23:59:59Z"
                            class="input input-bordered w-full"
                            value={draft.expires_at.clone().unwrap_or_default()}
                            oninput={on_expires_at}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                checked={draft.active}
                                oninput={on_active}
                            />
                            <span class="label-text">{"Active"}</span>
                        </label>
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
