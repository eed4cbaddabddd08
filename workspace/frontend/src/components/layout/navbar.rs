use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Storefront top navigation.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm">
            <div class="flex-1">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                    {"Animantra"}
                </Link<Route>>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1">
                    <li><Link<Route> to={Route::Shop}>{"Shop"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Personaggi}>{"Personaggi"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Fumetti}>{"Fumetti"}</Link<Route>></li>
                    <li>
                        <Link<Route> to={Route::Cart}>
                            <i class="fas fa-shopping-cart"></i> {"Cart"}
                        </Link<Route>>
                    </li>
                </ul>
            </div>
        </div>
    }
}
