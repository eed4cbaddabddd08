//! Cart page.
//!
//! Remove and clear mutate the displayed cart optimistically after the
//! backend confirms the delete, then kick off a best-effort background
//! refetch. The optimistic view is authoritative until that refetch
//! succeeds; a failed refetch leaves it in place and logs the discrepancy.

use common::CartView;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::shop::{
    apply_discount, clear_cart, get_cart, remove_cart_item, update_cart_item,
};
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::common::forms::input_value;
use crate::hooks::FetchState;
use crate::Route;

#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let navigator = use_navigator().expect("navigator");
    let state = use_state(|| FetchState::<CartView>::Loading);
    let discount_code = use_state(String::new);
    let busy = use_state(|| false);

    let load = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match get_cart().await {
                    Ok(cart) => state.set(FetchState::Success(cart)),
                    Err(e) => state.set(FetchState::Error(e)),
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    // Refetch that must not clobber the optimistic view on failure.
    fn background_refetch(state: UseStateHandle<FetchState<CartView>>) {
        wasm_bindgen_futures::spawn_local(async move {
            match get_cart().await {
                Ok(cart) => state.set(FetchState::Success(cart)),
                Err(e) => {
                    // Keep the optimistic state; just record the divergence.
                    log::warn!("Background cart refetch failed, keeping optimistic state: {e}");
                }
            }
        });
    }

    let on_remove = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |item_id: i64| {
            let state = state.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match remove_cart_item(item_id).await {
                    Ok(_) => {
                        if let FetchState::Success(cart) = &*state {
                            let mut optimistic = cart.clone();
                            optimistic.remove_item_locally(item_id);
                            state.set(FetchState::Success(optimistic));
                        }
                        background_refetch(state.clone());
                    }
                    Err(e) => toast.show_error_detail("Could not remove item", e),
                }
            });
        })
    };

    let on_clear = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let state = state.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match clear_cart().await {
                    Ok(_) => {
                        if let FetchState::Success(cart) = &*state {
                            let mut optimistic = cart.clone();
                            optimistic.clear_locally();
                            state.set(FetchState::Success(optimistic));
                        }
                        background_refetch(state.clone());
                    }
                    Err(e) => toast.show_error_detail("Could not clear the cart", e),
                }
            });
        })
    };

    let on_quantity = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |(item_id, quantity): (i64, u32)| {
            let state = state.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match update_cart_item(item_id, quantity).await {
                    Ok(cart) => state.set(FetchState::Success(cart)),
                    Err(e) => toast.show_error_detail("Could not update quantity", e),
                }
            });
        })
    };

    let on_discount_input = {
        let discount_code = discount_code.clone();
        Callback::from(move |e: InputEvent| discount_code.set(input_value(&e)))
    };

    let on_apply_discount = {
        let toast = toast.clone();
        let discount_code = discount_code.clone();
        let load = load.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let code = (*discount_code).trim().to_string();
            if code.is_empty() {
                toast.show_warning("Enter a discount code first");
                return;
            }

            let toast = toast.clone();
            let load = load.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                let result = apply_discount(&code).await;
                busy.set(false);
                match result {
                    Ok(applied) => {
                        toast.show_success_detail(
                            "Discount applied",
                            format!("New total €{:.2}", applied.total_after),
                        );
                        load.emit(());
                    }
                    Err(e) => toast.show_error_detail("Could not apply discount", e),
                }
            });
        })
    };

    let on_checkout = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Checkout))
    };

    let render = {
        let on_remove = on_remove.clone();
        let on_clear = on_clear.clone();
        let on_quantity = on_quantity.clone();
        let on_apply_discount = on_apply_discount.clone();
        let on_discount_input = on_discount_input.clone();
        let on_checkout = on_checkout.clone();
        let discount_code = discount_code.clone();
        let busy = busy.clone();
        Callback::from(move |cart: CartView| {
            if cart.is_empty() {
                return html! {
                    <div class="text-center py-16">
                        <i class="fas fa-shopping-cart text-5xl text-base-content/30 mb-4"></i>
                        <p class="text-lg text-base-content/70">{"Your cart is empty."}</p>
                        <Link<Route> to={Route::Shop} classes="btn btn-primary mt-4">
                            {"Browse the shop"}
                        </Link<Route>>
                    </div>
                };
            }

            html! {
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-4">
                        {for cart.cart.items.iter().map(|item| {
                            let item_id = item.id;
                            let remove = {
                                let on_remove = on_remove.clone();
                                Callback::from(move |_| on_remove.emit(item_id))
                            };
                            let quantity = item.quantity;
                            let inc = {
                                let on_quantity = on_quantity.clone();
                                Callback::from(move |_| on_quantity.emit((item_id, quantity + 1)))
                            };
                            let dec = {
                                let on_quantity = on_quantity.clone();
                                Callback::from(move |_| {
                                    if quantity > 1 {
                                        on_quantity.emit((item_id, quantity - 1));
                                    }
                                })
                            };
                            let title = item
                                .product
                                .as_ref()
                                .map(|p| p.title.clone())
                                .unwrap_or_else(|| format!("Product #{}", item.product_id));
                            html! {
                                <div key={item_id} class="card bg-base-100 shadow-sm">
                                    <div class="card-body py-4 flex-row items-center justify-between">
                                        <div>
                                            <h3 class="font-semibold">{title}</h3>
                                            if let Some(variant) = &item.variant {
                                                <p class="text-sm text-base-content/60">{&variant.name}</p>
                                            }
                                            <p class="text-sm">{format!("€{:.2} each", item.unit_price())}</p>
                                        </div>
                                        <div class="flex items-center gap-4">
                                            <div class="flex items-center gap-1">
                                                <button class="btn btn-xs" onclick={dec}>{"-"}</button>
                                                <span class="w-8 text-center">{item.quantity}</span>
                                                <button class="btn btn-xs" onclick={inc}>{"+"}</button>
                                            </div>
                                            <span class="font-bold w-20 text-right">
                                                {format!("€{:.2}", item.line_total())}
                                            </span>
                                            <button class="btn btn-ghost btn-sm text-error" onclick={remove}>
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })}

                        <button class="btn btn-ghost btn-sm text-error" onclick={on_clear.clone()}>
                            <i class="fas fa-trash"></i> {" Clear cart"}
                        </button>
                    </div>

                    <div class="card bg-base-100 shadow-md h-fit">
                        <div class="card-body">
                            <h3 class="card-title">{"Summary"}</h3>
                            <div class="text-sm space-y-1">
                                <div class="flex justify-between">
                                    <span>{"Subtotal"}</span>
                                    <span>{format!("€{:.2}", cart.subtotal)}</span>
                                </div>
                                <div class="flex justify-between">
                                    <span>{"Tax"}</span>
                                    <span>{format!("€{:.2}", cart.tax)}</span>
                                </div>
                                if cart.discount > 0.0 {
                                    <div class="flex justify-between text-success">
                                        <span>{"Discount"}</span>
                                        <span>{format!("-€{:.2}", cart.discount)}</span>
                                    </div>
                                }
                                <div class="divider my-1"></div>
                                <div class="flex justify-between font-bold text-base">
                                    <span>{"Total"}</span>
                                    <span>{format!("€{:.2}", cart.total)}</span>
                                </div>
                            </div>

                            <form class="join mt-4" onsubmit={on_apply_discount.clone()}>
                                <input
                                    type="text"
                                    placeholder="Discount code"
                                    class="input input-bordered input-sm join-item w-full"
                                    value={(*discount_code).clone()}
                                    oninput={on_discount_input.clone()}
                                />
                                <button type="submit" class="btn btn-sm join-item" disabled={*busy}>
                                    {"Apply"}
                                </button>
                            </form>

                            <button class="btn btn-primary w-full mt-4" onclick={on_checkout.clone()}>
                                {"Checkout"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    html! {
        <>
            <h1 class="text-3xl font-bold mb-6">{"Shopping Cart"}</h1>
            <FetchRender<CartView>
                state={(*state).clone()}
                render={render}
                on_retry={Some(load.clone())}
            />
        </>
    }
}
