use common::{validate_product_create, validate_product_update, Page, Product, ProductInput};
use yew::prelude::*;

use super::image_modal::ImageModal;
use super::product_modal::ProductModal;
use super::variant_modal::VariantModal;
use crate::api_client::admin_shop::{
    create_product, delete_product, list_products, update_product, CreateProductRequest,
    ProductListParams, UpdateProductRequest,
};
use crate::common::resource_controller::use_resource_controller;
use crate::components::common::forms::{input_value, select_value};
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

/// Draft shared by create and edit; on update only the fields the backend
/// allows to change are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub base_price: f64,
    pub currency: String,
    pub sku: String,
    pub gtin: String,
    pub character_value: String,
    pub etsy_link: String,
    pub status: String,
}

impl ProductDraft {
    fn from_product(product: &Product) -> Self {
        Self {
            slug: product.slug.clone(),
            title: product.title.clone(),
            short_description: product.short_description.clone(),
            long_description: product.long_description.clone().unwrap_or_default(),
            base_price: product.base_price,
            currency: product.currency.clone(),
            sku: product.sku.clone(),
            gtin: product.gtin.clone().unwrap_or_default(),
            character_value: product.character_value.clone().unwrap_or_default(),
            etsy_link: product.etsy_link.clone().unwrap_or_default(),
            status: product.status.clone(),
        }
    }

    fn validation_input(&self) -> ProductInput {
        ProductInput {
            title: self.title.clone(),
            slug: self.slug.clone(),
            short_description: self.short_description.clone(),
            long_description: self.long_description.clone(),
            base_price: self.base_price,
            currency: self.currency.clone(),
            sku: self.sku.clone(),
            gtin: self.gtin.clone(),
            status: self.status.clone(),
        }
    }

    fn create_request(&self) -> CreateProductRequest {
        CreateProductRequest {
            slug: self.slug.clone(),
            title: self.title.clone(),
            short_description: self.short_description.clone(),
            long_description: non_empty(&self.long_description),
            base_price: self.base_price,
            currency: non_empty(&self.currency),
            sku: self.sku.clone(),
            gtin: non_empty(&self.gtin),
            character_value: non_empty(&self.character_value),
            etsy_link: non_empty(&self.etsy_link),
            status: non_empty(&self.status),
        }
    }

    fn update_request(&self) -> UpdateProductRequest {
        UpdateProductRequest {
            slug: Some(self.slug.clone()),
            title: Some(self.title.clone()),
            short_description: Some(self.short_description.clone()),
            long_description: non_empty(&self.long_description),
            base_price: Some(self.base_price),
            currency: non_empty(&self.currency),
            sku: Some(self.sku.clone()),
            gtin: non_empty(&self.gtin),
            status: non_empty(&self.status),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[function_component(AdminProducts)]
pub fn admin_products() -> Html {
    let status_filter = use_state(String::new);
    let variants_for = use_state(|| None::<i64>);
    let images_for = use_state(|| None::<i64>);

    let controller = {
        let status_filter = status_filter.clone();
        use_resource_controller(
            move |query| {
                let status = (*status_filter).clone();
                async move {
                    let response = list_products(&ProductListParams {
                        status: (!status.is_empty()).then_some(status),
                        search: query.search.clone(),
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
            ProductDraft {
                currency: "EUR".to_string(),
                status: "draft".to_string(),
                ..Default::default()
            },
        )
    };
    let saving = use_state(|| false);

    let on_add = {
        let dialog = controller.dialog.clone();
        Callback::from(move |_| dialog.open_create())
    };

    let on_edit = {
        let dialog = controller.dialog.clone();
        Callback::from(move |product: Product| {
            dialog.open_edit(product.id, ProductDraft::from_product(&product));
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_product(id).await {
                    Ok(_) => controller.mutated("Product deleted"),
                    Err(e) => controller.mutation_failed("Failed to delete product", &e),
                }
            });
        })
    };

    let on_save = {
        let controller = controller.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let draft = controller.dialog.draft();
            let editing = controller.dialog.is_editing();

            let validation = if editing {
                validate_product_update(&draft.validation_input())
            } else {
                validate_product_create(&draft.validation_input())
            };
            if validation.has_errors() {
                controller.toast.show_warning(validation.message());
                return;
            }

            let controller = controller.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);
                let result = match controller.dialog.editing_id() {
                    Some(id) => update_product(id, &draft.update_request()).await,
                    None => create_product(&draft.create_request()).await.map(|_| ()),
                };
                saving.set(false);
                match result {
                    Ok(_) => controller.saved("Product saved"),
                    Err(e) => controller.save_failed("Failed to save product", &e),
                }
            });
        })
    };

    let on_search = {
        let set_search = controller.table.set_search();
        Callback::from(move |e: InputEvent| set_search.emit(input_value(&e)))
    };

    let on_status_filter = {
        let status_filter = status_filter.clone();
        let refresh = controller.table.refresh();
        Callback::from(move |e: Event| {
            status_filter.set(select_value(&e));
            refresh.emit(());
        })
    };

    let on_variants = {
        let variants_for = variants_for.clone();
        Callback::from(move |id: i64| variants_for.set(Some(id)))
    };

    let on_variants_close = {
        let variants_for = variants_for.clone();
        Callback::from(move |_| variants_for.set(None))
    };

    let on_images = {
        let images_for = images_for.clone();
        Callback::from(move |id: i64| images_for.set(Some(id)))
    };

    let on_images_close = {
        let images_for = images_for.clone();
        Callback::from(move |_| images_for.set(None))
    };

    let items = controller.table.items();

    html! {
        <>
            <PageHeader
                title="Shop Products"
                action_label="Add Product"
                on_action={on_add}
            />

            <div class="flex gap-4 mb-4">
                <input
                    type="text"
                    placeholder="Search products..."
                    class="input input-bordered w-full max-w-xs"
                    value={controller.table.search_query()}
                    oninput={on_search}
                />
                <select class="select select-bordered" onchange={on_status_filter}>
                    <option value="" selected={status_filter.is_empty()}>{"All statuses"}</option>
                    <option value="draft" selected={*status_filter == "draft"}>{"Draft"}</option>
                    <option value="published" selected={*status_filter == "published"}>{"Published"}</option>
                    <option value="archived" selected={*status_filter == "archived"}>{"Archived"}</option>
                </select>
            </div>

            if controller.table.loading() {
                <div class="flex justify-center items-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if items.is_empty() {
                <div class="text-center py-8">
                    <p class="text-gray-500">{"No products match the current filters."}</p>
                </div>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Title"}</th>
                                <th>{"SKU"}</th>
                                <th>{"Price"}</th>
                                <th>{"Status"}</th>
                                <th>{"Variants"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for items.iter().map(|product| {
                                let id = product.id;
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let product = product.clone();
                                    Callback::from(move |_| on_edit.emit(product.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                let variants = {
                                    let on_variants = on_variants.clone();
                                    Callback::from(move |_| on_variants.emit(id))
                                };
                                let images = {
                                    let on_images = on_images.clone();
                                    Callback::from(move |_| on_images.emit(id))
                                };
                                let status_badge = match product.status.as_str() {
                                    "published" => "badge-success",
                                    "archived" => "badge-ghost",
                                    _ => "badge-warning",
                                };
                                html! {
                                    <tr key={id}>
                                        <td class="font-medium">{&product.title}</td>
                                        <td><code>{&product.sku}</code></td>
                                        <td>{format!("€{:.2}", product.base_price)}</td>
                                        <td>
                                            <span class={classes!("badge", "badge-outline", status_badge)}>
                                                {&product.status}
                                            </span>
                                        </td>
                                        <td>
                                            <button class="btn btn-ghost btn-xs" onclick={variants}>
                                                {product.variants.as_ref().map_or(0, Vec::len)}
                                                {" variants"}
                                            </button>
                                        </td>
                                        <td class="text-right">
                                            <button class="btn btn-ghost btn-xs" onclick={images}>
                                                <i class="fas fa-image"></i>
                                            </button>
                                            <button class="btn btn-ghost btn-xs" onclick={edit}>
                                                <i class="fas fa-pen"></i>
                                            </button>
                                            <button class="btn btn-ghost btn-xs text-error" onclick={delete}>
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <Pagination
                current_page={controller.table.page()}
                total_items={controller.table.total_records()}
                items_per_page={controller.table.per_page()}
                on_page_change={controller.table.go_to_page()}
            />

            <ProductModal
                dialog={controller.dialog.clone()}
                saving={*saving}
                on_save={on_save}
            />

            if let Some(product_id) = *variants_for {
                <VariantModal
                    product_id={product_id}
                    on_close={on_variants_close}
                />
            }

            if let Some(product_id) = *images_for {
                <ImageModal
                    product_id={product_id}
                    on_close={on_images_close}
                />
            }
        </>
    }
}
