use common::Product;
use yew::prelude::*;

use crate::api_client::shop::{add_to_cart, get_product, AddToCartRequest};
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::common::forms::{input_value, parse_i64, select_value};
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct ShopProductDetailProps {
    pub slug: String,
}

/// Product page: gallery, variant picker, quantity, add to cart.
#[function_component(ShopProductDetail)]
pub fn shop_product_detail(props: &ShopProductDetailProps) -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let state = use_state(|| FetchState::<Product>::Loading);
    let selected_variant = use_state(|| None::<i64>);
    let quantity = use_state(|| 1u32);
    let adding = use_state(|| false);

    {
        let state = state.clone();
        let selected_variant = selected_variant.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            state.set(FetchState::Loading);
            selected_variant.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match get_product(&slug).await {
                    Ok(product) => state.set(FetchState::Success(product)),
                    Err(e) => state.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    let on_variant = {
        let selected_variant = selected_variant.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            selected_variant.set(value.parse::<i64>().ok());
        })
    };

    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            let value = parse_i64(&input_value(&e));
            quantity.set(value.clamp(1, 99) as u32);
        })
    };

    let on_add_to_cart = {
        let toast = toast.clone();
        let state = state.clone();
        let selected_variant = selected_variant.clone();
        let quantity = quantity.clone();
        let adding = adding.clone();
        Callback::from(move |_| {
            let FetchState::Success(product) = &*state else {
                return;
            };
            let request = AddToCartRequest {
                product_id: product.id,
                variant_id: *selected_variant,
                quantity: *quantity,
            };

            let toast = toast.clone();
            let adding = adding.clone();
            wasm_bindgen_futures::spawn_local(async move {
                adding.set(true);
                let result = add_to_cart(&request).await;
                adding.set(false);
                match result {
                    Ok(cart) => toast.show_success_detail(
                        "Added to cart",
                        format!("{} items in your cart", cart.item_count()),
                    ),
                    Err(e) => toast.show_error_detail("Could not add to cart", e),
                }
            });
        })
    };

    let render = {
        let selected_variant = selected_variant.clone();
        let quantity = quantity.clone();
        let adding = adding.clone();
        Callback::from(move |product: Product| {
            let variants = product.variants.clone().unwrap_or_default();
            let chosen = (*selected_variant).and_then(|id| variants.iter().find(|v| v.id == id));
            let unit_price = product.base_price + chosen.map_or(0.0, |v| v.price_adjustment);
            let out_of_stock = chosen.is_some_and(|v| v.stock <= 0);

            html! {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="space-y-2">
                        if let Some(image) = product.primary_image() {
                            <img
                                src={image.url.clone()}
                                alt={product.title.clone()}
                                class="w-full rounded-lg shadow"
                            />
                        }
                        if let Some(images) = &product.images {
                            <div class="flex gap-2 overflow-x-auto">
                                {for images.iter().map(|image| html! {
                                    <img
                                        key={image.id}
                                        src={image.url.clone()}
                                        class="w-20 h-20 object-cover rounded"
                                    />
                                })}
                            </div>
                        }
                    </div>

                    <div>
                        <h1 class="text-3xl font-bold">{&product.title}</h1>
                        <p class="text-2xl font-semibold my-2">{format!("€{unit_price:.2}")}</p>
                        <p class="text-base-content/70 mb-4">{&product.short_description}</p>

                        if !variants.is_empty() {
                            <div class="form-control mb-4 max-w-xs">
                                <label class="label">
                                    <span class="label-text">{"Variant"}</span>
                                </label>
                                <select class="select select-bordered" onchange={on_variant.clone()}>
                                    <option value="" selected={selected_variant.is_none()}>{"Standard"}</option>
                                    {for variants.iter().map(|variant| html! {
                                        <option
                                            value={variant.id.to_string()}
                                            selected={*selected_variant == Some(variant.id)}
                                            disabled={variant.stock <= 0}
                                        >
                                            {format!("{} ({:+.2})", variant.name, variant.price_adjustment)}
                                            if variant.stock <= 0 { {" — sold out"} }
                                        </option>
                                    })}
                                </select>
                            </div>
                        }

                        <div class="flex items-end gap-3 mb-6">
                            <div class="form-control w-24">
                                <label class="label">
                                    <span class="label-text">{"Qty"}</span>
                                </label>
                                <input
                                    type="number"
                                    min="1"
                                    max="99"
                                    class="input input-bordered"
                                    value={quantity.to_string()}
                                    oninput={on_quantity.clone()}
                                />
                            </div>
                            <button
                                class="btn btn-primary"
                                disabled={*adding || out_of_stock}
                                onclick={on_add_to_cart.clone()}
                            >
                                if *adding {
                                    <span class="loading loading-spinner"></span>
                                }
                                <i class="fas fa-cart-plus"></i>
                                {" Add to cart"}
                            </button>
                        </div>

                        if let Some(long_description) = &product.long_description {
                            <div class="prose max-w-none">
                                <p>{long_description}</p>
                            </div>
                        }
                    </div>
                </div>
            }
        })
    };

    html! {
        <FetchRender<Product>
            state={(*state).clone()}
            render={render}
        />
    }
}
