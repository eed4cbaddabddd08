use common::Page;
use yew::prelude::*;

use super::product_card::ProductCard;
use crate::api_client::category::get_categories;
use crate::api_client::shop::{list_products, CatalogParams};
use crate::common::data_table::use_data_table;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::toast::ToastContext;
use crate::components::common::forms::{input_value, select_value};
use crate::components::common::pagination::Pagination;
use crate::hooks::FetchState;

/// Public product catalog: searchable, filterable by category, paged.
#[function_component(ShopCatalog)]
pub fn shop_catalog() -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let category_filter = use_state(|| None::<i64>);
    let (categories_state, _) = use_fetch_with_refetch(get_categories);

    let table = {
        let category_filter = category_filter.clone();
        let toast = toast.clone();
        use_data_table(
            move |query| {
                let category = *category_filter;
                async move {
                    let response = list_products(&CatalogParams {
                        search: query.search.clone(),
                        category,
                        page: Some(query.page),
                        per_page: Some(query.per_page),
                        ..Default::default()
                    })
                    .await?;
                    Ok(Page {
                        items: response.products,
                        total: response.total,
                    })
                }
            },
            Some(Callback::from(move |error: String| {
                toast.show_error_detail("Failed to load the catalog", error);
            })),
        )
    };

    let on_search = {
        let set_search = table.set_search();
        Callback::from(move |e: InputEvent| set_search.emit(input_value(&e)))
    };

    let on_category = {
        let category_filter = category_filter.clone();
        let refresh = table.refresh();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            category_filter.set(value.parse::<i64>().ok());
            refresh.emit(());
        })
    };

    let categories = match &*categories_state {
        FetchState::Success(categories) => categories.clone(),
        _ => Vec::new(),
    };

    let items = table.items();

    html! {
        <>
            <h1 class="text-3xl font-bold mb-6">{"Shop"}</h1>

            <div class="flex gap-4 mb-6">
                <input
                    type="text"
                    placeholder="Search the shop..."
                    class="input input-bordered w-full max-w-xs"
                    value={table.search_query()}
                    oninput={on_search}
                />
                <select class="select select-bordered" onchange={on_category}>
                    <option value="" selected={category_filter.is_none()}>{"All categories"}</option>
                    {for categories.iter().map(|category| html! {
                        <option
                            value={category.id.to_string()}
                            selected={*category_filter == Some(category.id)}
                        >
                            {&category.name}
                        </option>
                    })}
                </select>
            </div>

            if table.loading() {
                <div class="flex justify-center items-center py-12">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if items.is_empty() {
                <div class="text-center py-12">
                    <p class="text-gray-500">{"Nothing here yet. Try another search or category."}</p>
                </div>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {for items.iter().map(|product| html! {
                        <ProductCard key={product.id} product={product.clone()} />
                    })}
                </div>
            }

            <Pagination
                current_page={table.page()}
                total_items={table.total_records()}
                items_per_page={table.per_page()}
                on_page_change={table.go_to_page()}
            />
        </>
    }
}
