use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Entry {
    route: Route,
    icon: &'static str,
    label: &'static str,
}

fn entry(route: Route, icon: &'static str, label: &'static str) -> Entry {
    Entry { route, icon, label }
}

/// Admin navigation sidebar.
#[function_component(AdminSidebar)]
pub fn admin_sidebar() -> Html {
    let entries = [
        entry(Route::AdminDashboard, "fas fa-gauge", "Dashboard"),
        entry(Route::AdminPersonaggi, "fas fa-user-astronaut", "Personaggi"),
        entry(Route::AdminFumetti, "fas fa-book-open", "Fumetti"),
        entry(Route::AdminCategories, "fas fa-tags", "Categories"),
        entry(Route::AdminProducts, "fas fa-box-open", "Products"),
        entry(Route::AdminOrders, "fas fa-receipt", "Orders"),
        entry(Route::AdminDiscounts, "fas fa-percent", "Discounts"),
        entry(Route::AdminNotifications, "fas fa-bell", "Notifications"),
        entry(Route::AdminEtsy, "fas fa-rotate", "Etsy Sync"),
    ];

    html! {
        <aside class="w-64 min-h-screen bg-base-100 shadow-md">
            <div class="p-4 text-xl font-bold">{"Animantra Admin"}</div>
            <ul class="menu p-2">
                {for entries.iter().map(|entry| html! {
                    <li>
                        <Link<Route> to={entry.route.clone()}>
                            <i class={entry.icon}></i>
                            {entry.label}
                        </Link<Route>>
                    </li>
                })}
            </ul>
        </aside>
    }
}
