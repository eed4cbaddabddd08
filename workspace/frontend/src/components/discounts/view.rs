use common::{Page, Validator};
use yew::prelude::*;

use super::discount_modal::DiscountModal;
use crate::api_client::discount::{
    create_discount, delete_discount, get_discount_stats, get_discounts, update_discount, Discount,
    DiscountPayload, DiscountStats,
};
use crate::common::resource_controller::use_resource_controller;
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

fn draft_from(discount: &Discount) -> DiscountPayload {
    DiscountPayload {
        code: discount.code.clone(),
        discount_type: discount.discount_type.clone(),
        value: discount.value,
        min_purchase: discount.min_purchase,
        max_uses: discount.max_uses,
        starts_at: discount.starts_at.clone(),
        expires_at: discount.expires_at.clone(),
        active: discount.active,
    }
}

fn format_value(discount: &Discount) -> String {
    if discount.discount_type == "percentage" {
        format!("{}%", discount.value)
    } else {
        format!("€{:.2}", discount.value)
    }
}

#[function_component(AdminDiscounts)]
pub fn admin_discounts() -> Html {
    let stats = use_state(|| None::<DiscountStats>);
    let controller = use_resource_controller(
        |query| async move {
            let response = get_discounts(query.page, query.per_page, None).await?;
            Ok(Page {
                items: response.discounts,
                total: response.total,
            })
        },
        DiscountPayload::default(),
    );
    let saving = use_state(|| false);

    let on_add = {
        let dialog = controller.dialog.clone();
        Callback::from(move |_| dialog.open_create())
    };

    let on_edit = {
        let dialog = controller.dialog.clone();
        Callback::from(move |discount: Discount| {
            dialog.open_edit(discount.id, draft_from(&discount));
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_discount(id).await {
                    Ok(_) => controller.mutated("Discount deleted"),
                    Err(e) => controller.mutation_failed("Failed to delete discount", &e),
                }
            });
        })
    };

    let on_stats = {
        let controller = controller.clone();
        let stats = stats.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            let stats = stats.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match get_discount_stats(id).await {
                    Ok(data) => stats.set(Some(data)),
                    Err(e) => controller.mutation_failed("Failed to load discount stats", &e),
                }
            });
        })
    };

    let on_stats_close = {
        let stats = stats.clone();
        Callback::from(move |_| stats.set(None))
    };

    let on_save = {
        let controller = controller.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let draft = controller.dialog.draft();

            let validation = Validator::new()
                .required("code", &draft.code)
                .min_length("code", &draft.code, 3)
                .max_length("code", &draft.code, 50)
                .one_of(
                    "type",
                    &draft.discount_type,
                    &["percentage", "fixed_amount"],
                )
                .min_value("value", draft.value, 0.0)
                .finish();
            if validation.has_errors() {
                controller.toast.show_warning(validation.message());
                return;
            }
            if draft.discount_type == "percentage" && draft.value > 100.0 {
                controller
                    .toast
                    .show_warning("value: percentage cannot exceed 100");
                return;
            }

            let controller = controller.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);
                let result = match controller.dialog.editing_id() {
                    Some(id) => update_discount(id, &draft).await,
                    None => create_discount(&draft).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => controller.saved("Discount saved"),
                    Err(e) => controller.save_failed("Failed to save discount", &e),
                }
            });
        })
    };

    let items = controller.table.items();

    html! {
        <>
            <PageHeader
                title="Discounts"
                action_label="Add Discount"
                on_action={on_add}
            />

            if controller.table.loading() {
                <div class="flex justify-center items-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if items.is_empty() {
                <div class="text-center py-8">
                    <p class="text-gray-500">{"No discount codes yet."}</p>
                </div>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Code"}</th>
                                <th>{"Value"}</th>
                                <th>{"Used"}</th>
                                <th>{"Expires"}</th>
                                <th>{"Active"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for items.iter().map(|discount| {
                                let id = discount.id;
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let discount = discount.clone();
                                    Callback::from(move |_| on_edit.emit(discount.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                let show_stats = {
                                    let on_stats = on_stats.clone();
                                    Callback::from(move |_| on_stats.emit(id))
                                };
                                let usage = match discount.max_uses {
                                    Some(max) => format!("{}/{}", discount.used_count, max),
                                    None => format!("{}/∞", discount.used_count),
                                };
                                html! {
                                    <tr key={id}>
                                        <td><code class="font-semibold">{&discount.code}</code></td>
                                        <td>{format_value(discount)}</td>
                                        <td>{usage}</td>
                                        <td>{discount.expires_at.clone().unwrap_or_else(|| "never".to_string())}</td>
                                        <td>
                                            if discount.active {
                                                <span class="badge badge-success badge-outline">{"active"}</span>
                                            } else {
                                                <span class="badge badge-ghost">{"inactive"}</span>
                                            }
                                        </td>
                                        <td class="text-right">
                                            <button class="btn btn-ghost btn-xs" onclick={show_stats}>
                                                <i class="fas fa-chart-simple"></i>
                                            </button>
                                            <button class="btn btn-ghost btn-xs" onclick={edit}>
                                                <i class="fas fa-pen"></i>
                                            </button>
                                            <button class="btn btn-ghost btn-xs text-error" onclick={delete}>
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <Pagination
                current_page={controller.table.page()}
                total_items={controller.table.total_records()}
                items_per_page={controller.table.per_page()}
                on_page_change={controller.table.go_to_page()}
            />

            <DiscountModal
                dialog={controller.dialog.clone()}
                saving={*saving}
                on_save={on_save}
            />

            if let Some(stats) = &*stats {
                <dialog class="modal modal-open">
                    <div class="modal-box max-w-sm">
                        <h3 class="font-bold text-lg">
                            {"Usage of "}<code>{&stats.discount.code}</code>
                        </h3>
                        <div class="py-4 text-sm space-y-2">
                            <div class="flex justify-between">
                                <span>{"Currently valid"}</span>
                                <span>{if stats.is_valid { "yes" } else { "no" }}</span>
                            </div>
                            <div class="flex justify-between">
                                <span>{"Times used"}</span>
                                <span>{stats.used_count}</span>
                            </div>
                            <div class="flex justify-between">
                                <span>{"Remaining uses"}</span>
                                <span>
                                    {if stats.remaining_uses < 0 {
                                        "unlimited".to_string()
                                    } else {
                                        stats.remaining_uses.to_string()
                                    }}
                                </span>
                            </div>
                            <div class="flex justify-between">
                                <span>{"Days until expiry"}</span>
                                <span>
                                    {stats.days_until_expiry
                                        .map(|d| d.to_string())
                                        .unwrap_or_else(|| "never expires".to_string())}
                                </span>
                            </div>
                        </div>
                        <div class="modal-action">
                            <button class="btn" onclick={on_stats_close.clone()}>{"Close"}</button>
                        </div>
                    </div>
                </dialog>
            }
        </>
    }
}
