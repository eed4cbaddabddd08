use common::Product;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <Link<Route> to={Route::ShopProduct { slug: product.slug.clone() }}>
            <div class="card bg-base-100 shadow-md hover:shadow-lg transition-shadow h-full">
                if let Some(image) = product.primary_image() {
                    <figure>
                        <img
                            src={image.url.clone()}
                            alt={image.alt_text.clone().unwrap_or_else(|| product.title.clone())}
                            class="h-48 w-full object-cover"
                        />
                    </figure>
                }
                <div class="card-body">
                    <h3 class="card-title text-base">{&product.title}</h3>
                    <p class="text-sm text-base-content/70 line-clamp-2">{&product.short_description}</p>
                    <div class="card-actions justify-between items-center mt-2">
                        <span class="font-bold">{format!("€{:.2}", product.base_price)}</span>
                        if product.variants.as_ref().is_some_and(|v| !v.is_empty()) {
                            <span class="badge badge-ghost badge-sm">{"options"}</span>
                        }
                    </div>
                </div>
            </div>
        </Link<Route>>
    }
}
