use common::{Address, CheckoutRequest, CheckoutResponse, Validator};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::shop::checkout;
use crate::common::toast::ToastContext;
use crate::components::common::forms::{input_value, opt, select_value};
use crate::Route;

fn validate_checkout(request: &CheckoutRequest) -> common::ValidationResult {
    Validator::new()
        .required("email", &request.email)
        .email("email", &request.email)
        .required("name", &request.name)
        .required("payment_method", &request.payment_method)
        .required("street", &request.shipping_address.street)
        .required("city", &request.shipping_address.city)
        .required("zip_code", &request.shipping_address.zip_code)
        .required("country", &request.shipping_address.country)
        .finish()
}

/// Checkout form. Client-side checks spare a round trip; the backend
/// revalidates and owns payment processing.
#[function_component(CheckoutPage)]
pub fn checkout_page() -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let draft = use_state(|| CheckoutRequest {
        payment_method: "stripe".to_string(),
        ..Default::default()
    });
    let placing = use_state(|| false);
    let completed = use_state(|| None::<CheckoutResponse>);

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.email = input_value(&e);
            draft.set(next);
        })
    };

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.name = input_value(&e);
            draft.set(next);
        })
    };

    let on_payment_method = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            next.payment_method = select_value(&e);
            draft.set(next);
        })
    };

    let on_discount_code = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.discount_code = opt(input_value(&e));
            draft.set(next);
        })
    };

    let edit_address = |apply: fn(&mut Address, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            apply(&mut next.shipping_address, input_value(&e));
            draft.set(next);
        })
    };

    let on_street = edit_address(|address, value| address.street = value);
    let on_city = edit_address(|address, value| address.city = value);
    let on_state = edit_address(|address, value| address.state = value);
    let on_zip = edit_address(|address, value| address.zip_code = value);
    let on_country = edit_address(|address, value| address.country = value);

    let on_submit = {
        let toast = toast.clone();
        let draft = draft.clone();
        let placing = placing.clone();
        let completed = completed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*draft).clone();

            let validation = validate_checkout(&request);
            if validation.has_errors() {
                toast.show_warning(validation.message());
                return;
            }

            let toast = toast.clone();
            let placing = placing.clone();
            let completed = completed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                placing.set(true);
                let result = checkout(request).await;
                placing.set(false);
                match result {
                    Ok(response) => {
                        toast.show_success_detail(
                            "Order placed",
                            format!("Order {}", response.order_number),
                        );
                        completed.set(Some(response));
                    }
                    Err(e) => toast.show_error_detail("Checkout failed", e),
                }
            });
        })
    };

    if let Some(order) = &*completed {
        return html! {
            <div class="text-center py-16">
                <i class="fas fa-circle-check text-5xl text-success mb-4"></i>
                <h1 class="text-3xl font-bold mb-2">{"Thank you!"}</h1>
                <p class="text-base-content/70">
                    {format!("Your order {} for €{:.2} was placed.", order.order_number, order.total)}
                </p>
                <p class="text-sm text-base-content/50 mb-6">
                    {"A confirmation email is on its way."}
                </p>
                <Link<Route> to={Route::Shop} classes="btn btn-primary">
                    {"Back to the shop"}
                </Link<Route>>
            </div>
        };
    }

    let current = (*draft).clone();

    html! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">{"Checkout"}</h1>

            <form onsubmit={on_submit} class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            type="email"
                            class="input input-bordered w-full"
                            value={current.email.clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Full name"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={current.name.clone()}
                            oninput={on_name}
                        />
                    </div>
                </div>

                <h3 class="font-semibold pt-2">{"Shipping address"}</h3>
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{"Street"}</span>
                    </label>
                    <input
                        type="text"
                        class="input input-bordered w-full"
                        value={current.shipping_address.street.clone()}
                        oninput={on_street}
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"City"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={current.shipping_address.city.clone()}
                            oninput={on_city}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Province/State"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={current.shipping_address.state.clone()}
                            oninput={on_state}
                        />
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"ZIP code"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={current.shipping_address.zip_code.clone()}
                            oninput={on_zip}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Country"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={current.shipping_address.country.clone()}
                            oninput={on_country}
                        />
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Payment method"}</span>
                        </label>
                        <select class="select select-bordered w-full" onchange={on_payment_method}>
                            <option value="stripe" selected={current.payment_method == "stripe"}>{"Card (Stripe)"}</option>
                            <option value="etsy" selected={current.payment_method == "etsy"}>{"Etsy checkout"}</option>
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Discount code (optional)"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full font-mono"
                            value={current.discount_code.clone().unwrap_or_default()}
                            oninput={on_discount_code}
                        />
                    </div>
                </div>

                <button type="submit" class="btn btn-primary w-full" disabled={*placing}>
                    if *placing {
                        <span class="loading loading-spinner"></span>
                    }
                    {"Place order"}
                </button>
            </form>
        </div>
    }
}
