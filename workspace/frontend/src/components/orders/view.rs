use common::Page;
use yew::prelude::*;

use super::order_detail::OrderDetail;
use crate::api_client::admin_shop::{list_orders, Order, OrderListParams};
use crate::common::data_table::use_data_table;
use crate::common::toast::ToastContext;
use crate::components::common::forms::{input_value, select_value};
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

fn payment_badge(status: &str) -> &'static str {
    match status {
        "paid" => "badge-success",
        "failed" => "badge-error",
        "refunded" => "badge-warning",
        _ => "badge-ghost",
    }
}

#[function_component(AdminOrders)]
pub fn admin_orders() -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let payment_filter = use_state(String::new);
    let fulfillment_filter = use_state(String::new);
    let selected = use_state(|| None::<i64>);

    let table = {
        let payment_filter = payment_filter.clone();
        let fulfillment_filter = fulfillment_filter.clone();
        let toast = toast.clone();
        use_data_table(
            move |query| {
                let payment = (*payment_filter).clone();
                let fulfillment = (*fulfillment_filter).clone();
                async move {
                    let response = list_orders(&OrderListParams {
                        payment_status: (!payment.is_empty()).then_some(payment),
                        fulfillment_status: (!fulfillment.is_empty()).then_some(fulfillment),
                        customer_email: query.search.clone(),
                        page: Some(query.page),
                        per_page: Some(query.per_page),
                    })
                    .await?;
                    Ok(Page {
                        items: response.orders,
                        total: response.total,
                    })
                }
            },
            Some(Callback::from(move |error: String| {
                toast.show_error_detail("Failed to load orders", error);
            })),
        )
    };

    let on_search = {
        let set_search = table.set_search();
        Callback::from(move |e: InputEvent| set_search.emit(input_value(&e)))
    };

    let on_payment_filter = {
        let payment_filter = payment_filter.clone();
        let refresh = table.refresh();
        Callback::from(move |e: Event| {
            payment_filter.set(select_value(&e));
            refresh.emit(());
        })
    };

    let on_fulfillment_filter = {
        let fulfillment_filter = fulfillment_filter.clone();
        let refresh = table.refresh();
        Callback::from(move |e: Event| {
            fulfillment_filter.set(select_value(&e));
            refresh.emit(());
        })
    };

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |order_id: i64| selected.set(Some(order_id)))
    };

    let on_detail_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let on_detail_changed = {
        let refresh = table.refresh();
        let selected = selected.clone();
        Callback::from(move |_| {
            selected.set(None);
            refresh.emit(());
        })
    };

    let items = table.items();

    html! {
        <>
            <PageHeader title="Shop Orders" />

            <div class="flex gap-4 mb-4">
                <input
                    type="text"
                    placeholder="Search by customer email..."
                    class="input input-bordered w-full max-w-xs"
                    value={table.search_query()}
                    oninput={on_search}
                />
                <select class="select select-bordered" onchange={on_payment_filter}>
                    <option value="" selected={payment_filter.is_empty()}>{"Any payment"}</option>
                    <option value="pending" selected={*payment_filter == "pending"}>{"Pending"}</option>
                    <option value="paid" selected={*payment_filter == "paid"}>{"Paid"}</option>
                    <option value="failed" selected={*payment_filter == "failed"}>{"Failed"}</option>
                    <option value="refunded" selected={*payment_filter == "refunded"}>{"Refunded"}</option>
                </select>
                <select class="select select-bordered" onchange={on_fulfillment_filter}>
                    <option value="" selected={fulfillment_filter.is_empty()}>{"Any fulfillment"}</option>
                    <option value="unfulfilled" selected={*fulfillment_filter == "unfulfilled"}>{"Unfulfilled"}</option>
                    <option value="partially_fulfilled" selected={*fulfillment_filter == "partially_fulfilled"}>{"Partially fulfilled"}</option>
                    <option value="fulfilled" selected={*fulfillment_filter == "fulfilled"}>{"Fulfilled"}</option>
                </select>
            </div>

            if table.loading() {
                <div class="flex justify-center items-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if items.is_empty() {
                <div class="text-center py-8">
                    <p class="text-gray-500">{"No orders match the current filters."}</p>
                </div>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Order"}</th>
                                <th>{"Customer"}</th>
                                <th>{"Total"}</th>
                                <th>{"Payment"}</th>
                                <th>{"Fulfillment"}</th>
                                <th>{"Placed"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for items.iter().map(|order: &Order| {
                                let open = {
                                    let on_open = on_open.clone();
                                    let order_id = order.id;
                                    Callback::from(move |_| on_open.emit(order_id))
                                };
                                html! {
                                    <tr key={order.id} class="cursor-pointer hover" onclick={open}>
                                        <td class="font-mono">{&order.order_number}</td>
                                        <td>
                                            <div class="font-medium">{&order.customer_name}</div>
                                            <div class="text-sm text-base-content/70">{&order.customer_email}</div>
                                        </td>
                                        <td>{format!("€{:.2}", order.total)}</td>
                                        <td>
                                            <span class={classes!("badge", "badge-outline", payment_badge(&order.payment_status))}>
                                                {&order.payment_status}
                                            </span>
                                        </td>
                                        <td>{&order.fulfillment_status}</td>
                                        <td>{order.created_at.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <Pagination
                current_page={table.page()}
                total_items={table.total_records()}
                items_per_page={table.per_page()}
                on_page_change={table.go_to_page()}
            />

            if let Some(order_id) = *selected {
                <OrderDetail
                    order_id={order_id}
                    on_close={on_detail_close}
                    on_changed={on_detail_changed}
                />
            }
        </>
    }
}
