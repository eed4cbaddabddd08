use yew::prelude::*;

use crate::api_client::fumetto::{get_fumetti, FumettoResponse};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRenderList;

/// Public comics gallery.
#[function_component(FumettiGallery)]
pub fn fumetti_gallery() -> Html {
    let (state, refetch) = use_fetch_with_refetch(get_fumetti);
    let open = use_state(|| None::<FumettoResponse>);

    let render_item = {
        let open = open.clone();
        Callback::from(move |fumetto: FumettoResponse| {
            let on_open = {
                let open = open.clone();
                let fumetto = fumetto.clone();
                Callback::from(move |_| open.set(Some(fumetto.clone())))
            };
            html! {
                <div class="card bg-base-100 shadow-md cursor-pointer" onclick={on_open}>
                    if let Some(cover) = &fumetto.cover_image {
                        <figure>
                            <img src={cover.clone()} alt={fumetto.title.clone()} class="h-56 w-full object-cover" />
                        </figure>
                    }
                    <div class="card-body">
                        <h3 class="card-title">{&fumetto.title}</h3>
                        if let Some(description) = &fumetto.description {
                            <p class="text-sm text-base-content/70">{description}</p>
                        }
                        <p class="text-xs text-base-content/50">
                            {format!("{} pages", fumetto.pages.len())}
                        </p>
                    </div>
                </div>
            }
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_| open.set(None))
    };

    html! {
        <>
            <h1 class="text-3xl font-bold mb-6">{"Fumetti"}</h1>
            <FetchRenderList<FumettoResponse>
                state={(*state).clone()}
                render_item={render_item}
                on_retry={Some(refetch)}
                empty_message={Some("No comics published yet.".to_string())}
                container_class={Some("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6".to_string())}
            />

            if let Some(fumetto) = (*open).clone() {
                <dialog class="modal modal-open">
                    <div class="modal-box max-w-4xl">
                        <div class="flex justify-between items-center mb-4">
                            <h3 class="font-bold text-lg">{&fumetto.title}</h3>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close.clone()}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                        if let Some(about) = &fumetto.about {
                            <p class="text-sm text-base-content/70 mb-4">{about}</p>
                        }
                        // Pages in reading order
                        <div class="space-y-2">
                            {for fumetto.pages.iter().enumerate().map(|(i, page)| html! {
                                <img
                                    key={i}
                                    src={page.clone()}
                                    alt={format!("{} - page {}", fumetto.title, i + 1)}
                                    class="w-full rounded"
                                />
                            })}
                        </div>
                    </div>
                    <form class="modal-backdrop" method="dialog">
                        <button onclick={on_close}>{"close"}</button>
                    </form>
                </dialog>
            }
        </>
    }
}
