//! Etsy marketplace sync dashboard: status, manual triggers, listing links
//! and the inventory sync log.

use common::Page;
use yew::prelude::*;

use crate::api_client::etsy::{
    get_config, get_inventory_sync_logs, get_sync_status, link_product, list_etsy_products,
    trigger_inventory_sync, trigger_product_sync, unlink_product, EtsyProduct, SyncStatus,
    SyncTriggerRequest,
};
use crate::common::data_table::use_data_table;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::common::forms::{input_value, parse_i64, select_value};
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

fn sync_badge(status: &str) -> &'static str {
    match status {
        "synced" => "badge-success",
        "failed" => "badge-error",
        "pending" => "badge-warning",
        _ => "badge-ghost",
    }
}

#[function_component(AdminEtsy)]
pub fn admin_etsy() -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let (status_state, refetch_status) = use_fetch_with_refetch(get_sync_status);
    let (config_state, _) = use_fetch_with_refetch(get_config);
    let status_filter = use_state(String::new);
    let link_target = use_state(|| None::<String>);
    let link_product_id = use_state(String::new);

    let table = {
        let status_filter = status_filter.clone();
        let toast = toast.clone();
        use_data_table(
            move |query| {
                let filter = (*status_filter).clone();
                async move {
                    let response = list_etsy_products(
                        (!filter.is_empty()).then_some(filter),
                        Some(query.page),
                        Some(query.per_page),
                    )
                    .await?;
                    Ok(Page {
                        items: response.products,
                        total: response.total,
                    })
                }
            },
            Some(Callback::from(move |error: String| {
                toast.show_error_detail("Failed to load Etsy listings", error);
            })),
        )
    };

    let (logs_state, refetch_logs) =
        use_fetch_with_refetch(|| async { get_inventory_sync_logs(Some(1), Some(10), None).await });

    let on_product_sync = {
        let toast = toast.clone();
        let refetch_status = refetch_status.clone();
        Callback::from(move |_| {
            let toast = toast.clone();
            let refetch_status = refetch_status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match trigger_product_sync(&SyncTriggerRequest::default()).await {
                    Ok(response) => {
                        toast.show_success(response.message);
                        refetch_status.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to trigger product sync", e),
                }
            });
        })
    };

    let on_inventory_sync = {
        let toast = toast.clone();
        let refetch_status = refetch_status.clone();
        Callback::from(move |_| {
            let toast = toast.clone();
            let refetch_status = refetch_status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match trigger_inventory_sync(&SyncTriggerRequest::default()).await {
                    Ok(response) => {
                        toast.show_success(response.message);
                        refetch_status.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to trigger inventory sync", e),
                }
            });
        })
    };

    let on_status_filter = {
        let status_filter = status_filter.clone();
        let refresh = table.refresh();
        Callback::from(move |e: Event| {
            status_filter.set(select_value(&e));
            refresh.emit(());
        })
    };

    let on_unlink = {
        let toast = toast.clone();
        let refresh = table.refresh();
        Callback::from(move |listing_id: String| {
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match unlink_product(&listing_id).await {
                    Ok(_) => {
                        toast.show_success("Listing unlinked");
                        refresh.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to unlink listing", e),
                }
            });
        })
    };

    let on_link_open = {
        let link_target = link_target.clone();
        let link_product_id = link_product_id.clone();
        Callback::from(move |listing_id: String| {
            link_product_id.set(String::new());
            link_target.set(Some(listing_id));
        })
    };

    let on_link_product_id = {
        let link_product_id = link_product_id.clone();
        Callback::from(move |e: InputEvent| link_product_id.set(input_value(&e)))
    };

    let on_link_cancel = {
        let link_target = link_target.clone();
        Callback::from(move |_| link_target.set(None))
    };

    let on_link_confirm = {
        let toast = toast.clone();
        let refresh = table.refresh();
        let link_target = link_target.clone();
        let link_product_id = link_product_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(listing_id) = (*link_target).clone() else {
                return;
            };
            let product_id = parse_i64(&link_product_id);
            if product_id <= 0 {
                toast.show_warning("product_id: must be a positive integer");
                return;
            }

            let toast = toast.clone();
            let refresh = refresh.clone();
            let link_target = link_target.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match link_product(&listing_id, product_id).await {
                    Ok(_) => {
                        toast.show_success("Listing linked");
                        link_target.set(None);
                        refresh.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to link listing", e),
                }
            });
        })
    };

    let render_status = Callback::from(move |status: SyncStatus| {
        html! {
            <div class="stats shadow w-full mb-6">
                <div class="stat">
                    <div class="stat-title">{"Sync"}</div>
                    <div class="stat-value text-lg">
                        {if status.enabled { "enabled" } else { "disabled" }}
                    </div>
                    <div class="stat-desc">
                        {status.last_product_sync.clone().map(|t| format!("last product sync {t}")).unwrap_or_else(|| "never synced".to_string())}
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Listings"}</div>
                    <div class="stat-value text-lg">{status.total_products}</div>
                    <div class="stat-desc">
                        {format!("{} synced · {} pending · {} failed",
                            status.synced_products, status.pending_products, status.failed_products)}
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Rate limit"}</div>
                    <div class="stat-value text-lg">
                        {status.rate_limit_remaining.map(|r| r.to_string()).unwrap_or_else(|| "—".to_string())}
                    </div>
                    <div class="stat-desc">{"requests remaining today"}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"In progress"}</div>
                    <div class="stat-value text-lg">
                        {if status.product_sync_in_progress || status.inventory_sync_in_progress { "yes" } else { "no" }}
                    </div>
                </div>
            </div>
        }
    });

    let items = table.items();

    html! {
        <>
            <PageHeader title="Etsy Sync" />

            {match &*config_state {
                crate::hooks::FetchState::Success(config) => html! {
                    <div class="alert mb-4">
                        <i class="fas fa-gear"></i>
                        <span>
                            {format!(
                                "Integration {} · API key {} · shop {} · rate limit {}",
                                if config.enabled { "enabled" } else { "disabled" },
                                if config.api_key_configured { "configured" } else { "missing" },
                                config.shop_id.clone().unwrap_or_else(|| "not set".to_string()),
                                if config.rate_limit_enabled {
                                    format!("{}/day", config.max_requests_per_day)
                                } else {
                                    "off".to_string()
                                },
                            )}
                        </span>
                    </div>
                },
                _ => html! {},
            }}

            <FetchRender<SyncStatus>
                state={(*status_state).clone()}
                render={render_status}
                on_retry={Some(refetch_status.clone())}
            />

            <div class="flex gap-2 mb-6">
                <button class="btn btn-primary btn-sm" onclick={on_product_sync}>
                    <i class="fas fa-rotate"></i> {" Sync products"}
                </button>
                <button class="btn btn-primary btn-sm btn-outline" onclick={on_inventory_sync}>
                    <i class="fas fa-boxes-stacked"></i> {" Sync inventory"}
                </button>
                <select class="select select-bordered select-sm ml-auto" onchange={on_status_filter}>
                    <option value="" selected={status_filter.is_empty()}>{"All listings"}</option>
                    <option value="synced" selected={*status_filter == "synced"}>{"Synced"}</option>
                    <option value="pending" selected={*status_filter == "pending"}>{"Pending"}</option>
                    <option value="failed" selected={*status_filter == "failed"}>{"Failed"}</option>
                    <option value="unlinked" selected={*status_filter == "unlinked"}>{"Unlinked"}</option>
                </select>
            </div>

            if table.loading() {
                <div class="flex justify-center items-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if items.is_empty() {
                <div class="text-center py-8">
                    <p class="text-gray-500">{"No Etsy listings known yet. Run a product sync first."}</p>
                </div>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-lg shadow mb-6">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Listing"}</th>
                                <th>{"Title"}</th>
                                <th>{"Price"}</th>
                                <th>{"Qty"}</th>
                                <th>{"Sync"}</th>
                                <th>{"Local product"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for items.iter().map(|listing: &EtsyProduct| {
                                let listing_id = listing.listing_id.clone();
                                let link = {
                                    let on_link_open = on_link_open.clone();
                                    let listing_id = listing_id.clone();
                                    Callback::from(move |_| on_link_open.emit(listing_id.clone()))
                                };
                                let unlink = {
                                    let on_unlink = on_unlink.clone();
                                    let listing_id = listing_id.clone();
                                    Callback::from(move |_| on_unlink.emit(listing_id.clone()))
                                };
                                html! {
                                    <tr key={listing.id}>
                                        <td>
                                            <a class="link font-mono" href={listing.url.clone()} target="_blank">
                                                {&listing.listing_id}
                                            </a>
                                        </td>
                                        <td class="max-w-xs truncate">{&listing.title}</td>
                                        <td>{format!("€{:.2}", listing.price)}</td>
                                        <td>{listing.quantity}</td>
                                        <td>
                                            <span class={classes!("badge", "badge-outline", sync_badge(&listing.sync_status))}>
                                                {&listing.sync_status}
                                            </span>
                                        </td>
                                        <td>
                                            {listing.product_id.map(|id| format!("#{id}")).unwrap_or_else(|| "—".to_string())}
                                        </td>
                                        <td class="text-right">
                                            if listing.product_id.is_some() {
                                                <button class="btn btn-ghost btn-xs" onclick={unlink}>
                                                    <i class="fas fa-link-slash"></i> {" Unlink"}
                                                </button>
                                            } else {
                                                <button class="btn btn-ghost btn-xs" onclick={link}>
                                                    <i class="fas fa-link"></i> {" Link"}
                                                </button>
                                            }
                                        </td>
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

            <div class="flex items-center justify-between mt-8 mb-2">
                <h3 class="text-lg font-semibold">{"Recent inventory sync activity"}</h3>
                <button class="btn btn-ghost btn-xs" onclick={refetch_logs.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-rotate-right"></i>
                </button>
            </div>
            {match &*logs_state {
                crate::hooks::FetchState::Success(response) if !response.logs.is_empty() => html! {
                    <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                        <table class="table table-sm">
                            <thead>
                                <tr>
                                    <th>{"Listing"}</th>
                                    <th>{"Direction"}</th>
                                    <th>{"Quantity"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"At"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for response.logs.iter().map(|entry| html! {
                                    <tr key={entry.id}>
                                        <td class="font-mono">{&entry.listing_id}</td>
                                        <td>{&entry.direction}</td>
                                        <td>
                                            {format!("{} → {}",
                                                entry.old_quantity.map(|q| q.to_string()).unwrap_or_else(|| "?".to_string()),
                                                entry.new_quantity.map(|q| q.to_string()).unwrap_or_else(|| "?".to_string()))}
                                        </td>
                                        <td>
                                            if entry.status == "success" {
                                                <span class="badge badge-success badge-outline badge-sm">{"success"}</span>
                                            } else {
                                                <span class="badge badge-error badge-sm" title={entry.error_message.clone().unwrap_or_default()}>
                                                    {"failed"}
                                                </span>
                                            }
                                        </td>
                                        <td>{&entry.synced_at}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                },
                _ => html! {
                    <p class="text-sm text-base-content/60">{"No inventory sync activity recorded."}</p>
                },
            }}

            if let Some(listing_id) = (*link_target).clone() {
                <dialog class="modal modal-open">
                    <div class="modal-box max-w-sm">
                        <h3 class="font-bold text-lg">{"Link listing"}</h3>
                        <p class="text-sm text-base-content/70 py-1">
                            {format!("Etsy listing {listing_id}")}
                        </p>
                        <form onsubmit={on_link_confirm} class="space-y-4 pt-2">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{"Local product ID"}</span>
                                </label>
                                <input
                                    type="number"
                                    min="1"
                                    class="input input-bordered w-full"
                                    value={(*link_product_id).clone()}
                                    oninput={on_link_product_id}
                                />
                            </div>
                            <div class="modal-action">
                                <button type="button" class="btn" onclick={on_link_cancel}>{"Cancel"}</button>
                                <button type="submit" class="btn btn-primary">{"Link"}</button>
                            </div>
                        </form>
                    </div>
                </dialog>
            }
        </>
    }
}
