use common::{paginate_locally, Validator};
use yew::prelude::*;

use super::fumetto_modal::FumettoModal;
use crate::api_client::fumetto::{
    create_fumetto, delete_fumetto, get_fumetti, update_fumetto, FumettoPayload, FumettoResponse,
};
use crate::common::resource_controller::use_resource_controller;
use crate::components::common::forms::input_value;
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

fn draft_from(fumetto: &FumettoResponse) -> FumettoPayload {
    FumettoPayload {
        title: fumetto.title.clone(),
        slug: fumetto.slug.clone(),
        description: fumetto.description.clone(),
        about: fumetto.about.clone(),
        cover_image: fumetto.cover_image.clone(),
        pages: fumetto.pages.clone(),
        order: fumetto.order,
    }
}

#[function_component(AdminFumetti)]
pub fn admin_fumetti() -> Html {
    let controller = use_resource_controller(
        |query| async move {
            let fumetti = get_fumetti().await?;
            Ok(paginate_locally(&fumetti, &query, |f, needle| {
                f.title.to_lowercase().contains(&needle.to_lowercase())
            }))
        },
        FumettoPayload::default(),
    );
    let saving = use_state(|| false);

    let on_add = {
        let dialog = controller.dialog.clone();
        Callback::from(move |_| dialog.open_create())
    };

    let on_edit = {
        let dialog = controller.dialog.clone();
        Callback::from(move |fumetto: FumettoResponse| {
            dialog.open_edit(fumetto.id, draft_from(&fumetto));
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_fumetto(id).await {
                    Ok(_) => controller.mutated("Fumetto deleted"),
                    Err(e) => controller.mutation_failed("Failed to delete fumetto", &e),
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
                .required("title", &draft.title)
                .max_length("title", &draft.title, 200)
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
                    Some(id) => update_fumetto(id, &draft).await,
                    None => create_fumetto(&draft).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => controller.saved("Fumetto saved"),
                    Err(e) => controller.save_failed("Failed to save fumetto", &e),
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
                title="Fumetti"
                action_label="Add Fumetto"
                on_action={on_add}
            />

            <input
                type="text"
                placeholder="Search fumetti..."
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
                    <p class="text-gray-500">{"No fumetti yet."}</p>
                </div>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Cover"}</th>
                                <th>{"Title"}</th>
                                <th>{"Pages"}</th>
                                <th>{"Order"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for items.iter().map(|fumetto| {
                                let id = fumetto.id;
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let fumetto = fumetto.clone();
                                    Callback::from(move |_| on_edit.emit(fumetto.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                html! {
                                    <tr key={id}>
                                        <td>
                                            if let Some(cover) = &fumetto.cover_image {
                                                <img src={cover.clone()} alt={fumetto.title.clone()} class="w-10 h-14 object-cover rounded" />
                                            }
                                        </td>
                                        <td class="font-medium">{&fumetto.title}</td>
                                        <td>{fumetto.pages.len()}</td>
                                        <td>{fumetto.order.map(|o| o.to_string()).unwrap_or_default()}</td>
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

            <FumettoModal
                dialog={controller.dialog.clone()}
                saving={*saving}
                on_save={on_save}
            />
        </>
    }
}
