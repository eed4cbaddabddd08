use common::Address;
use yew::prelude::*;

use crate::api_client::admin_shop::{get_order, refund_order, update_fulfillment_status, Order};
use crate::common::toast::ToastContext;
use crate::components::common::forms::{input_value, parse_f64, select_value};
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct OrderDetailProps {
    pub order_id: i64,
    pub on_close: Callback<()>,
    /// Fired after a mutation so the listing can refetch.
    pub on_changed: Callback<()>,
}

fn address_block(title: &str, address: &Address) -> Html {
    html! {
        <div>
            <h4 class="font-semibold text-sm">{title}</h4>
            <p class="text-sm text-base-content/70">
                {&address.street}<br />
                {format!("{} {} ({})", address.zip_code, address.city, address.state)}<br />
                {&address.country}
            </p>
        </div>
    }
}

/// Order drill-down: items and totals, fulfillment transitions, refunds.
/// The full record is fetched by id because the listing omits line items.
#[function_component(OrderDetail)]
pub fn order_detail(props: &OrderDetailProps) -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let state = use_state(|| FetchState::<Order>::Loading);
    let busy = use_state(|| false);
    let refund_amount = use_state(String::new);

    {
        let state = state.clone();
        use_effect_with(props.order_id, move |order_id| {
            let order_id = *order_id;
            state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match get_order(order_id).await {
                    Ok(order) => state.set(FetchState::Success(order)),
                    Err(e) => state.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_fulfillment = {
        let toast = toast.clone();
        let busy = busy.clone();
        let on_changed = props.on_changed.clone();
        let order_id = props.order_id;
        Callback::from(move |e: Event| {
            let status = select_value(&e);
            let toast = toast.clone();
            let busy = busy.clone();
            let on_changed = on_changed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                let result = update_fulfillment_status(order_id, &status).await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        toast.show_success("Fulfillment status updated");
                        on_changed.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to update fulfillment", e),
                }
            });
        })
    };

    let on_refund_amount = {
        let refund_amount = refund_amount.clone();
        Callback::from(move |e: InputEvent| refund_amount.set(input_value(&e)))
    };

    let on_refund = {
        let toast = toast.clone();
        let busy = busy.clone();
        let refund_amount = refund_amount.clone();
        let on_changed = props.on_changed.clone();
        let order_id = props.order_id;
        Callback::from(move |_| {
            let amount = {
                let raw = (*refund_amount).clone();
                if raw.trim().is_empty() {
                    None
                } else {
                    Some(parse_f64(&raw))
                }
            };
            let toast = toast.clone();
            let busy = busy.clone();
            let on_changed = on_changed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                let result = refund_order(order_id, amount).await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        toast.show_success("Refund issued");
                        on_changed.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to refund order", e),
                }
            });
        })
    };

    html! {
        <dialog class="modal modal-open">
            <div class="modal-box max-w-3xl">
                {match &*state {
                    FetchState::Loading | FetchState::NotStarted => html! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    },
                    FetchState::Error(error) => html! {
                        <>
                            <div class="alert alert-error my-4">
                                <span>{error}</span>
                            </div>
                            <div class="modal-action">
                                <button class="btn" onclick={close.clone()}>{"Close"}</button>
                            </div>
                        </>
                    },
                    FetchState::Success(order) => html! {
                        <>
                            <div class="flex justify-between items-center">
                                <h3 class="font-bold text-lg">
                                    {"Order "}<span class="font-mono">{&order.order_number}</span>
                                </h3>
                                <button class="btn btn-sm btn-ghost btn-circle" onclick={close.clone()}>
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>

                            <div class="grid grid-cols-2 gap-6 py-4">
                                <div>
                                    <h4 class="font-semibold text-sm">{"Customer"}</h4>
                                    <p class="text-sm text-base-content/70">
                                        {&order.customer_name}<br />
                                        {&order.customer_email}
                                    </p>
                                </div>
                                {address_block("Shipping address", &order.shipping_address)}
                            </div>

                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>{"Item"}</th>
                                        <th>{"Qty"}</th>
                                        <th class="text-right">{"Unit"}</th>
                                        <th class="text-right">{"Total"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for order.items.iter().map(|item| html! {
                                        <tr key={item.id}>
                                            <td>
                                                {&item.product_title}
                                                if let Some(variant) = &item.variant_name {
                                                    <span class="text-base-content/60">{format!(" ({variant})")}</span>
                                                }
                                            </td>
                                            <td>{item.quantity}</td>
                                            <td class="text-right">{format!("€{:.2}", item.unit_price)}</td>
                                            <td class="text-right">{format!("€{:.2}", item.total_price)}</td>
                                        </tr>
                                    })}
                                </tbody>
                            </table>

                            <div class="flex justify-end">
                                <div class="text-sm space-y-1 text-right">
                                    <div>{format!("Subtotal: €{:.2}", order.subtotal)}</div>
                                    <div>{format!("Tax: €{:.2}", order.tax)}</div>
                                    if order.discount > 0.0 {
                                        <div>{format!("Discount: -€{:.2}", order.discount)}</div>
                                    }
                                    <div class="font-bold">{format!("Total: €{:.2}", order.total)}</div>
                                </div>
                            </div>

                            <div class="divider"></div>

                            <div class="flex items-end justify-between gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{"Fulfillment status"}</span>
                                    </label>
                                    <select
                                        class="select select-bordered select-sm"
                                        disabled={*busy}
                                        onchange={on_fulfillment.clone()}
                                    >
                                        <option value="unfulfilled" selected={order.fulfillment_status == "unfulfilled"}>{"Unfulfilled"}</option>
                                        <option value="partially_fulfilled" selected={order.fulfillment_status == "partially_fulfilled"}>{"Partially fulfilled"}</option>
                                        <option value="fulfilled" selected={order.fulfillment_status == "fulfilled"}>{"Fulfilled"}</option>
                                    </select>
                                </div>

                                if order.payment_status == "paid" {
                                    <div class="flex items-end gap-2">
                                        <div class="form-control">
                                            <label class="label">
                                                <span class="label-text">{"Refund amount (blank = full)"}</span>
                                            </label>
                                            <input
                                                type="number"
                                                step="0.01"
                                                min="0"
                                                class="input input-bordered input-sm w-40"
                                                value={(*refund_amount).clone()}
                                                oninput={on_refund_amount.clone()}
                                            />
                                        </div>
                                        <button
                                            class="btn btn-warning btn-sm"
                                            disabled={*busy}
                                            onclick={on_refund.clone()}
                                        >
                                            {"Refund"}
                                        </button>
                                    </div>
                                }
                            </div>
                        </>
                    },
                }}
            </div>
        </dialog>
    }
}
