//! Gallery management for one product: captions, ordering, removal.
//! Binary uploads go through the backend's upload endpoint directly and are
//! out of scope here.

use common::ProductImage;
use yew::prelude::*;

use crate::api_client::admin_shop::{
    delete_product_image, list_product_images, update_product_image, UpdateImageRequest,
};
use crate::common::toast::ToastContext;
use crate::components::common::forms::{change_value, parse_i64};
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub product_id: i64,
    pub on_close: Callback<()>,
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let state = use_state(|| FetchState::<Vec<ProductImage>>::Loading);
    let reload_tick = use_state(|| 0u64);

    {
        let state = state.clone();
        use_effect_with((props.product_id, *reload_tick), move |(product_id, _)| {
            let product_id = *product_id;
            state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match list_product_images(product_id).await {
                    Ok(images) => state.set(FetchState::Success(images)),
                    Err(e) => state.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    let reload = {
        let reload_tick = reload_tick.clone();
        Callback::from(move |_: ()| reload_tick.set(*reload_tick + 1))
    };

    let on_update = {
        let toast = toast.clone();
        let reload = reload.clone();
        let product_id = props.product_id;
        Callback::from(move |(image_id, request): (i64, UpdateImageRequest)| {
            let toast = toast.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match update_product_image(product_id, image_id, &request).await {
                    Ok(_) => reload.emit(()),
                    Err(e) => toast.show_error_detail("Failed to update image", e),
                }
            });
        })
    };

    let on_delete = {
        let toast = toast.clone();
        let reload = reload.clone();
        let product_id = props.product_id;
        Callback::from(move |image_id: i64| {
            let toast = toast.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_product_image(product_id, image_id).await {
                    Ok(_) => {
                        toast.show_success("Image removed");
                        reload.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to remove image", e),
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class="modal modal-open">
            <div class="modal-box max-w-2xl">
                <div class="flex justify-between items-center">
                    <h3 class="font-bold text-lg">{"Product Images"}</h3>
                    <button class="btn btn-sm btn-ghost btn-circle" onclick={close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                {match &*state {
                    FetchState::Loading | FetchState::NotStarted => html! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    },
                    FetchState::Error(error) => html! {
                        <div class="alert alert-error my-4">
                            <span>{error}</span>
                        </div>
                    },
                    FetchState::Success(images) if images.is_empty() => html! {
                        <div class="alert alert-info my-4">
                            <span>{"This product has no images yet."}</span>
                        </div>
                    },
                    FetchState::Success(images) => html! {
                        <div class="space-y-3 my-4">
                            {for images.iter().map(|image| {
                                let image_id = image.id;
                                let alt_text = image.alt_text.clone().unwrap_or_default();
                                // Committed on change, not per keystroke
                                let save_alt = {
                                    let on_update = on_update.clone();
                                    Callback::from(move |e: Event| {
                                        let value = change_value(&e);
                                        on_update.emit((image_id, UpdateImageRequest {
                                            alt_text: Some(value),
                                            position: None,
                                        }));
                                    })
                                };
                                let save_position = {
                                    let on_update = on_update.clone();
                                    Callback::from(move |e: Event| {
                                        let value = parse_i64(&change_value(&e));
                                        on_update.emit((image_id, UpdateImageRequest {
                                            alt_text: None,
                                            position: Some(value as i32),
                                        }));
                                    })
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |_| on_delete.emit(image_id))
                                };
                                html! {
                                    <div key={image_id} class="flex items-center gap-3 p-2 bg-base-200 rounded">
                                        <img src={image.url.clone()} class="w-16 h-16 object-cover rounded" />
                                        if image.is_primary {
                                            <span class="badge badge-primary badge-sm">{"primary"}</span>
                                        }
                                        <input
                                            type="text"
                                            placeholder="Alt text"
                                            class="input input-bordered input-sm flex-1"
                                            value={alt_text}
                                            onchange={save_alt}
                                        />
                                        <input
                                            type="number"
                                            min="0"
                                            class="input input-bordered input-sm w-20"
                                            value={image.display_order.to_string()}
                                            onchange={save_position}
                                        />
                                        <button class="btn btn-ghost btn-sm text-error" onclick={delete}>
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </div>
                                }
                            })}
                        </div>
                    },
                }}

                <div class="modal-action">
                    <button class="btn" onclick={close}>{"Close"}</button>
                </div>
            </div>
        </dialog>
    }
}
