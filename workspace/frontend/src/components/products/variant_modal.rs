//! Variant and inventory management for one product.

use common::{validate_variant, Product, VariantInput};
use yew::prelude::*;

use crate::api_client::admin_shop::{
    add_variant, adjust_inventory, get_product, update_variant, InventoryAdjustment,
    VariantPayload,
};
use crate::common::form_dialog::use_form_dialog;
use crate::common::toast::ToastContext;
use crate::components::common::forms::{input_value, parse_f64, parse_i64};
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct VariantModalProps {
    pub product_id: i64,
    pub on_close: Callback<()>,
}

#[function_component(VariantModal)]
pub fn variant_modal(props: &VariantModalProps) -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let product = use_state(|| FetchState::<Product>::Loading);
    let reload_tick = use_state(|| 0u64);
    let form = use_form_dialog(VariantPayload::default());
    let saving = use_state(|| false);

    {
        let product = product.clone();
        use_effect_with((props.product_id, *reload_tick), move |(product_id, _)| {
            let product_id = *product_id;
            product.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match get_product(product_id).await {
                    Ok(data) => product.set(FetchState::Success(data)),
                    Err(e) => product.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    let reload = {
        let reload_tick = reload_tick.clone();
        Callback::from(move |_: ()| reload_tick.set(*reload_tick + 1))
    };

    let on_add_variant = {
        let form = form.clone();
        Callback::from(move |_| form.open_create())
    };

    let on_save_variant = {
        let form = form.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        let saving = saving.clone();
        let product_id = props.product_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = form.draft();

            let validation = validate_variant(&VariantInput {
                sku: draft.sku.clone(),
                name: draft.name.clone(),
                stock: draft.stock,
            });
            if validation.has_errors() {
                toast.show_warning(validation.message());
                return;
            }

            let form = form.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);
                let result = match form.editing_id() {
                    Some(id) => update_variant(id, &draft).await,
                    None => add_variant(product_id, &draft).await.map(|_| ()),
                };
                saving.set(false);
                match result {
                    Ok(_) => {
                        toast.show_success("Variant saved");
                        form.close();
                        reload.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to save variant", e),
                }
            });
        })
    };

    let on_adjust = {
        let toast = toast.clone();
        let reload = reload.clone();
        Callback::from(move |adjustment: InventoryAdjustment| {
            let toast = toast.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match adjust_inventory(&adjustment).await {
                    Ok(_) => {
                        toast.show_success("Inventory adjusted");
                        reload.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to adjust inventory", e),
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_sku = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            form.update(|draft| draft.sku = value);
        })
    };
    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            form.update(|draft| draft.name = value);
        })
    };
    let on_attributes = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            form.update(|draft| draft.attributes = value);
        })
    };
    let on_adjustment_price = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = parse_f64(&input_value(&e));
            form.update(|draft| draft.price_adjustment = value);
        })
    };
    let on_stock = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = parse_i64(&input_value(&e));
            form.update(|draft| draft.stock = value);
        })
    };

    let draft = form.draft();

    html! {
        <dialog class="modal modal-open">
            <div class="modal-box max-w-3xl">
                <div class="flex justify-between items-center">
                    <h3 class="font-bold text-lg">{"Variants & Inventory"}</h3>
                    <button class="btn btn-sm btn-ghost btn-circle" onclick={close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                {match &*product {
                    FetchState::Loading | FetchState::NotStarted => html! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    },
                    FetchState::Error(error) => html! {
                        <div class="alert alert-error my-4">
                            <span>{error}</span>
                        </div>
                    },
                    FetchState::Success(product) => {
                        let variants = product.variants.clone().unwrap_or_default();
                        html! {
                            <>
                                <p class="text-sm text-base-content/70 mt-1">{&product.title}</p>

                                if variants.is_empty() {
                                    <div class="alert alert-info my-4">
                                        <span>{"No variants yet. The product sells at its base price."}</span>
                                    </div>
                                } else {
                                    <table class="table table-sm my-4">
                                        <thead>
                                            <tr>
                                                <th>{"SKU"}</th>
                                                <th>{"Name"}</th>
                                                <th>{"Price adj."}</th>
                                                <th>{"Stock"}</th>
                                                <th class="text-right">{"Actions"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {for variants.iter().map(|variant| {
                                                let variant_id = variant.id;
                                                let edit = {
                                                    let form = form.clone();
                                                    let variant = variant.clone();
                                                    Callback::from(move |_| {
                                                        form.open_edit(variant.id, VariantPayload {
                                                            sku: variant.sku.clone(),
                                                            name: variant.name.clone(),
                                                            attributes: variant.attributes.clone(),
                                                            price_adjustment: variant.price_adjustment,
                                                            stock: variant.stock,
                                                        });
                                                    })
                                                };
                                                let add_one = {
                                                    let on_adjust = on_adjust.clone();
                                                    Callback::from(move |_| on_adjust.emit(InventoryAdjustment {
                                                        variant_id,
                                                        quantity: 1,
                                                        operation: "add".to_string(),
                                                    }))
                                                };
                                                let subtract_one = {
                                                    let on_adjust = on_adjust.clone();
                                                    Callback::from(move |_| on_adjust.emit(InventoryAdjustment {
                                                        variant_id,
                                                        quantity: 1,
                                                        operation: "subtract".to_string(),
                                                    }))
                                                };
                                                let zero = {
                                                    let on_adjust = on_adjust.clone();
                                                    Callback::from(move |_| on_adjust.emit(InventoryAdjustment {
                                                        variant_id,
                                                        quantity: 0,
                                                        operation: "set".to_string(),
                                                    }))
                                                };
                                                html! {
                                                    <tr key={variant_id}>
                                                        <td><code>{&variant.sku}</code></td>
                                                        <td>{&variant.name}</td>
                                                        <td>{format!("{:+.2}", variant.price_adjustment)}</td>
                                                        <td>
                                                            <div class="flex items-center gap-1">
                                                                <button class="btn btn-xs" onclick={subtract_one}>{"-"}</button>
                                                                <span class="w-8 text-center">{variant.stock}</span>
                                                                <button class="btn btn-xs" onclick={add_one}>{"+"}</button>
                                                                <button class="btn btn-xs btn-ghost" onclick={zero}>{"zero"}</button>
                                                            </div>
                                                        </td>
                                                        <td class="text-right">
                                                            <button class="btn btn-ghost btn-xs" onclick={edit}>
                                                                <i class="fas fa-pen"></i>
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })}
                                        </tbody>
                                    </table>
                                }
                            </>
                        }
                    }
                }}

                if form.show() {
                    <form onsubmit={on_save_variant} class="border-t border-base-300 pt-4 space-y-3">
                        <h4 class="font-semibold">
                            {if form.is_editing() { "Edit variant" } else { "New variant" }}
                        </h4>
                        <div class="grid grid-cols-2 gap-3">
                            <input
                                type="text"
                                placeholder="SKU"
                                class="input input-bordered input-sm w-full font-mono"
                                value={draft.sku.clone()}
                                oninput={on_sku}
                            />
                            <input
                                type="text"
                                placeholder="Name (e.g. A3 print)"
                                class="input input-bordered input-sm w-full"
                                value={draft.name.clone()}
                                oninput={on_name}
                            />
                        </div>
                        <input
                            type="text"
                            placeholder={r#"Attributes JSON, e.g. {"size":"A3"}"#}
                            class="input input-bordered input-sm w-full font-mono"
                            value={draft.attributes.clone()}
                            oninput={on_attributes}
                        />
                        <div class="grid grid-cols-2 gap-3">
                            <input
                                type="number"
                                step="0.01"
                                placeholder="Price adjustment"
                                class="input input-bordered input-sm w-full"
                                value={draft.price_adjustment.to_string()}
                                oninput={on_adjustment_price}
                            />
                            <input
                                type="number"
                                min="0"
                                placeholder="Stock"
                                class="input input-bordered input-sm w-full"
                                value={draft.stock.to_string()}
                                oninput={on_stock}
                            />
                        </div>
                        <div class="flex justify-end gap-2">
                            <button type="button" class="btn btn-sm" onclick={form.on_close().reform(|_: MouseEvent| ())} disabled={*saving}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn btn-sm btn-primary" disabled={*saving}>
                                if *saving {
                                    <span class="loading loading-spinner loading-xs"></span>
                                }
                                {"Save variant"}
                            </button>
                        </div>
                    </form>
                } else {
                    <div class="flex justify-between mt-2">
                        <button class="btn btn-sm btn-outline" onclick={on_add_variant}>
                            <i class="fas fa-plus"></i> {" Add variant"}
                        </button>
                        <button class="btn btn-sm" onclick={close}>{"Close"}</button>
                    </div>
                }
            </div>
        </dialog>
    }
}
