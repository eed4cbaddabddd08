use yew::prelude::*;

use crate::api_client::admin_shop::{list_notifications, list_orders, list_products, Notification, OrderListParams, ProductListParams};
use crate::api_client::personaggio::get_personaggi_admin;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;

/// Everything the dashboard shows, gathered in one fetch.
#[derive(Clone, PartialEq)]
pub struct DashboardData {
    pub product_count: u64,
    pub order_count: u64,
    pub unread_notifications: u64,
    pub personaggio_count: usize,
    pub recent_notifications: Vec<Notification>,
}

async fn load_dashboard() -> Result<DashboardData, String> {
    let products = list_products(&ProductListParams {
        page: Some(1),
        per_page: Some(1),
        ..Default::default()
    })
    .await?;
    let orders = list_orders(&OrderListParams {
        page: Some(1),
        per_page: Some(1),
        ..Default::default()
    })
    .await?;
    let notifications = list_notifications(false, Some(1), Some(5)).await?;
    let personaggi = get_personaggi_admin().await?;

    Ok(DashboardData {
        product_count: products.total,
        order_count: orders.total,
        unread_notifications: notifications.unread_count,
        personaggio_count: personaggi.len(),
        recent_notifications: notifications.notifications,
    })
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let (state, refetch) = use_fetch_with_refetch(load_dashboard);

    let render = Callback::from(|data: DashboardData| {
        html! {
            <>
                <div class="stats shadow w-full mb-8">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <i class="fas fa-box-open text-3xl"></i>
                        </div>
                        <div class="stat-title">{"Products"}</div>
                        <div class="stat-value">{data.product_count}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <i class="fas fa-receipt text-3xl"></i>
                        </div>
                        <div class="stat-title">{"Orders"}</div>
                        <div class="stat-value">{data.order_count}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <i class="fas fa-user-astronaut text-3xl"></i>
                        </div>
                        <div class="stat-title">{"Personaggi"}</div>
                        <div class="stat-value">{data.personaggio_count}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-warning">
                            <i class="fas fa-bell text-3xl"></i>
                        </div>
                        <div class="stat-title">{"Unread notifications"}</div>
                        <div class="stat-value">{data.unread_notifications}</div>
                    </div>
                </div>

                <h3 class="text-lg font-semibold mb-2">{"Latest notifications"}</h3>
                if data.recent_notifications.is_empty() {
                    <p class="text-sm text-base-content/60">{"All quiet."}</p>
                } else {
                    <div class="space-y-2">
                        {for data.recent_notifications.iter().map(|notification| html! {
                            <div key={notification.id} class="card bg-base-100 shadow-sm">
                                <div class="card-body py-3 px-4">
                                    <span class="font-medium">{&notification.title}</span>
                                    <p class="text-sm text-base-content/70">{&notification.message}</p>
                                </div>
                            </div>
                        })}
                    </div>
                }
            </>
        }
    });

    html! {
        <FetchRender<DashboardData>
            state={(*state).clone()}
            render={render}
            on_retry={Some(refetch)}
            loading_text={Some("Loading dashboard...".to_string())}
        />
    }
}
