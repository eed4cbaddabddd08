use common::{paginate_locally, validate_personaggio, PersonaggioInput};
use yew::prelude::*;

use super::personaggio_modal::PersonaggioModal;
use crate::api_client::personaggio::{
    create_personaggio, delete_personaggio, get_personaggi_admin, restore_personaggio,
    update_personaggio, PersonaggioPayload, PersonaggioResponse,
};
use crate::common::resource_controller::use_resource_controller;
use crate::components::common::forms::input_value;
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

fn draft_from(personaggio: &PersonaggioResponse) -> PersonaggioPayload {
    PersonaggioPayload {
        name: personaggio.name.clone(),
        description: personaggio.description.clone(),
        icon: personaggio.icon.clone(),
        images: personaggio.images.clone(),
        background_color: personaggio.background_color.clone(),
        background_type: personaggio.background_type.clone(),
        gradient_from: personaggio.gradient_from.clone(),
        gradient_to: personaggio.gradient_to.clone(),
        background_image: personaggio.background_image.clone(),
        order: personaggio.order,
    }
}

fn validation_input(draft: &PersonaggioPayload) -> PersonaggioInput {
    PersonaggioInput {
        name: draft.name.clone(),
        description: draft.description.clone(),
        icon: draft.icon.clone().unwrap_or_default(),
        images: draft.images.clone(),
        background_color: draft.background_color.clone().unwrap_or_default(),
        background_type: draft.background_type.clone().unwrap_or_default(),
        gradient_from: draft.gradient_from.clone().unwrap_or_default(),
        gradient_to: draft.gradient_to.clone().unwrap_or_default(),
        background_image: draft.background_image.clone().unwrap_or_default(),
        order: draft.order,
    }
}

#[function_component(AdminPersonaggi)]
pub fn admin_personaggi() -> Html {
    let controller = use_resource_controller(
        |query| async move {
            let personaggi = get_personaggi_admin().await?;
            Ok(paginate_locally(&personaggi, &query, |p, needle| {
                p.name.to_lowercase().contains(&needle.to_lowercase())
            }))
        },
        PersonaggioPayload::default(),
    );
    let saving = use_state(|| false);

    let on_add = {
        let dialog = controller.dialog.clone();
        Callback::from(move |_| dialog.open_create())
    };

    let on_edit = {
        let dialog = controller.dialog.clone();
        Callback::from(move |personaggio: PersonaggioResponse| {
            dialog.open_edit(personaggio.id, draft_from(&personaggio));
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_personaggio(id).await {
                    Ok(_) => controller.mutated("Personaggio deleted"),
                    Err(e) => controller.mutation_failed("Failed to delete personaggio", &e),
                }
            });
        })
    };

    let on_restore = {
        let controller = controller.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match restore_personaggio(id).await {
                    Ok(_) => controller.mutated("Personaggio restored"),
                    Err(e) => controller.mutation_failed("Failed to restore personaggio", &e),
                }
            });
        })
    };

    let on_save = {
        let controller = controller.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let draft = controller.dialog.draft();

            let validation = validate_personaggio(&validation_input(&draft));
            if validation.has_errors() {
                controller.toast.show_warning(validation.message());
                return;
            }

            let controller = controller.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);
                let result = match controller.dialog.editing_id() {
                    Some(id) => update_personaggio(id, &draft).await,
                    None => create_personaggio(&draft).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => controller.saved("Personaggio saved"),
                    Err(e) => controller.save_failed("Failed to save personaggio", &e),
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
                title="Personaggi"
                action_label="Add Personaggio"
                on_action={on_add}
            />

            <input
                type="text"
                placeholder="Search personaggi..."
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
                    <p class="text-gray-500">{"No personaggi yet. Add the first character of the universe!"}</p>
                </div>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Icon"}</th>
                                <th>{"Name"}</th>
                                <th>{"Images"}</th>
                                <th>{"Order"}</th>
                                <th>{"Status"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for items.iter().map(|personaggio| {
                                let deleted = personaggio.deleted_at.is_some();
                                let id = personaggio.id;
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let personaggio = personaggio.clone();
                                    Callback::from(move |_| on_edit.emit(personaggio.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                let restore = {
                                    let on_restore = on_restore.clone();
                                    Callback::from(move |_| on_restore.emit(id))
                                };
                                html! {
                                    <tr key={id} class={classes!(deleted.then_some("opacity-50"))}>
                                        <td>
                                            if let Some(icon) = &personaggio.icon {
                                                <img src={icon.clone()} alt={personaggio.name.clone()} class="w-10 h-10 rounded-full object-cover" />
                                            }
                                        </td>
                                        <td class="font-medium">{&personaggio.name}</td>
                                        <td>{personaggio.images.len()}</td>
                                        <td>{personaggio.order.map(|o| o.to_string()).unwrap_or_default()}</td>
                                        <td>
                                            if deleted {
                                                <span class="badge badge-ghost">{"deleted"}</span>
                                            } else {
                                                <span class="badge badge-success badge-outline">{"active"}</span>
                                            }
                                        </td>
                                        <td class="text-right">
                                            if deleted {
                                                <button class="btn btn-ghost btn-xs" onclick={restore}>
                                                    <i class="fas fa-rotate-left"></i> {" Restore"}
                                                </button>
                                            } else {
                                                <button class="btn btn-ghost btn-xs" onclick={edit}>
                                                    <i class="fas fa-pen"></i>
                                                </button>
                                                <button class="btn btn-ghost btn-xs text-error" onclick={delete}>
                                                    <i class="fas fa-trash"></i>
                                                </button>
                                            }
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

            <PersonaggioModal
                dialog={controller.dialog.clone()}
                saving={*saving}
                on_save={on_save}
            />
        </>
    }
}
