use yew::prelude::*;
use yew_router::prelude::*;

use super::sidebar::AdminSidebar;
use crate::api_client::auth;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub title: String,
    pub children: Children,
}

/// Shell for admin pages: sidebar, header with logout, content area.
/// Without a stored token the user is sent to the login page; the backend's
/// 401 remains the real enforcement point.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let navigator = use_navigator().expect("navigator");

    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if !auth::is_logged_in() {
                log::info!("No admin token present, redirecting to login");
                navigator.push(&Route::AdminLogin);
            }
            || ()
        });
    }

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            auth::logout();
            navigator.push(&Route::AdminLogin);
        })
    };

    html! {
        <div class="flex min-h-screen bg-base-200">
            <AdminSidebar />
            <div class="flex-1">
                <header class="navbar bg-base-100 shadow-sm px-6">
                    <div class="flex-1 text-lg font-semibold">{&props.title}</div>
                    <div class="flex-none">
                        <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                            <i class="fas fa-right-from-bracket"></i> {" Logout"}
                        </button>
                    </div>
                </header>
                <main class="p-6">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
