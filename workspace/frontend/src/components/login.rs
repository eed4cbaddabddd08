use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::auth;
use crate::common::toast::ToastContext;
use crate::components::common::forms::input_value;
use crate::Route;

/// Admin login form. On success the bearer token is stored through the
/// credential store and the user lands on the dashboard.
#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let navigator = use_navigator().expect("navigator");
    let username = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| username.set(input_value(&e)))
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    let on_submit = {
        let toast = toast.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.trim().is_empty() || password.is_empty() {
                toast.show_warning("Username and password are required");
                return;
            }

            let toast = toast.clone();
            let navigator = navigator.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                let result = auth::login(&username, &password).await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        toast.show_success("Welcome back");
                        navigator.push(&Route::AdminDashboard);
                    }
                    Err(e) => toast.show_error_detail("Login failed", e),
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center">
            <div class="card bg-base-100 shadow-xl w-96">
                <div class="card-body">
                    <h2 class="card-title justify-center mb-2">{"Animantra Admin"}</h2>
                    <form onsubmit={on_submit} class="space-y-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Username"}</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                value={(*username).clone()}
                                oninput={on_username}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Password"}</span>
                            </label>
                            <input
                                type="password"
                                class="input input-bordered w-full"
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary w-full" disabled={*busy}>
                            if *busy {
                                <span class="loading loading-spinner"></span>
                            }
                            {"Log in"}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
