use common::{paginate_locally, Validator};
use yew::prelude::*;

use super::category_modal::CategoryModal;
use crate::api_client::category::{
    create_category, delete_category, get_categories_admin, update_category, CategoryPayload,
    CategoryResponse,
};
use crate::common::resource_controller::use_resource_controller;
use crate::components::common::forms::input_value;
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

fn draft_from(category: &CategoryResponse) -> CategoryPayload {
    CategoryPayload {
        name: category.name.clone(),
        slug: category.slug.clone(),
        description: category.description.clone(),
        parent_id: category.parent_id,
    }
}

#[function_component(AdminCategories)]
pub fn admin_categories() -> Html {
    let controller = use_resource_controller(
        |query| async move {
            // The category endpoint is unpaged; page and search client-side.
            let categories = get_categories_admin(None, false).await?;
            Ok(paginate_locally(&categories, &query, |c, needle| {
                c.name.to_lowercase().contains(&needle.to_lowercase())
                    || c.slug.contains(&needle.to_lowercase())
            }))
        },
        CategoryPayload::default(),
    );
    let saving = use_state(|| false);

    let on_add = {
        let dialog = controller.dialog.clone();
        Callback::from(move |_| dialog.open_create())
    };

    let on_edit = {
        let dialog = controller.dialog.clone();
        Callback::from(move |category: CategoryResponse| {
            dialog.open_edit(category.id, draft_from(&category));
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |category: CategoryResponse| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_category(category.id).await {
                    Ok(_) => controller.mutated("Category deleted"),
                    Err(e) => controller.mutation_failed("Failed to delete category", &e),
                }
            });
        })
    };

    let on_save = {
        let controller = controller.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let draft = controller.dialog.draft();

            let validation = Validator::new()
                .required("name", &draft.name)
                .required("slug", &draft.slug)
                .finish();
            if validation.has_errors() {
                controller.toast.show_warning(validation.message());
                return;
            }

            let controller = controller.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);
                let result = match controller.dialog.editing_id() {
                    Some(id) => update_category(id, &draft).await.map(|_| ()),
                    None => create_category(&draft).await.map(|_| ()),
                };
                saving.set(false);
                match result {
                    Ok(_) => controller.saved("Category saved"),
                    Err(e) => controller.save_failed("Failed to save category", &e),
                }
            });
        })
    };

    let on_search = {
        let set_search = controller.table.set_search();
        Callback::from(move |e: InputEvent| set_search.emit(input_value(&e)))
    };

    let items = controller.table.items();

    html! {
        <>
            <PageHeader
                title="Categories"
                action_label="Add Category"
                on_action={on_add}
            />

            <input
                type="text"
                placeholder="Search categories..."
                class="input input-bordered w-full max-w-xs mb-4"
                value={controller.table.search_query()}
                oninput={on_search}
            />

            if controller.table.loading() {
                <div class="flex justify-center items-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if items.is_empty() {
                <div class="text-center py-8">
                    <p class="text-gray-500">{"No categories found. Create your first category to get started!"}</p>
                </div>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Slug"}</th>
                                <th>{"Description"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for items.iter().map(|category| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let category = category.clone();
                                    Callback::from(move |_| on_edit.emit(category.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let category = category.clone();
                                    Callback::from(move |_| on_delete.emit(category.clone()))
                                };
                                html! {
                                    <tr key={category.id}>
                                        <td class="font-medium">{&category.name}</td>
                                        <td><code>{&category.slug}</code></td>
                                        <td>{category.description.clone().unwrap_or_default()}</td>
                                        <td class="text-right">
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

            <CategoryModal
                dialog={controller.dialog.clone()}
                saving={*saving}
                on_save={on_save}
            />
        </>
    }
}
