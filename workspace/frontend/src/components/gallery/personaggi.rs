use yew::prelude::*;

use crate::api_client::personaggio::{get_personaggi, PersonaggioResponse};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRenderList;

fn card_style(personaggio: &PersonaggioResponse) -> String {
    match personaggio.background_type.as_deref() {
        Some("solid") => personaggio
            .background_color
            .as_ref()
            .map(|color| format!("background-color: {color};"))
            .unwrap_or_default(),
        Some("gradient") => match (&personaggio.gradient_from, &personaggio.gradient_to) {
            (Some(from), Some(to)) => {
                format!("background-image: linear-gradient(135deg, {from}, {to});")
            }
            _ => String::new(),
        },
        Some("image") => personaggio
            .background_image
            .as_ref()
            .map(|url| format!("background-image: url({url}); background-size: cover;"))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Public character gallery.
#[function_component(PersonaggiGallery)]
pub fn personaggi_gallery() -> Html {
    let (state, refetch) = use_fetch_with_refetch(get_personaggi);

    let render_item = Callback::from(|personaggio: PersonaggioResponse| {
        html! {
            <div class="card shadow-md overflow-hidden" style={card_style(&personaggio)}>
                <div class="card-body bg-base-100/80">
                    <div class="flex items-center gap-3">
                        if let Some(icon) = &personaggio.icon {
                            <img
                                src={icon.clone()}
                                alt={personaggio.name.clone()}
                                class="w-14 h-14 rounded-full object-cover"
                            />
                        }
                        <h3 class="card-title">{&personaggio.name}</h3>
                    </div>
                    <p class="text-sm">{&personaggio.description}</p>
                    if !personaggio.images.is_empty() {
                        <div class="flex gap-2 mt-2 overflow-x-auto">
                            {for personaggio.images.iter().take(4).map(|image| html! {
                                <img src={image.clone()} class="w-16 h-16 object-cover rounded" />
                            })}
                        </div>
                    }
                </div>
            </div>
        }
    });

    html! {
        <>
            <h1 class="text-3xl font-bold mb-6">{"Personaggi"}</h1>
            <FetchRenderList<PersonaggioResponse>
                state={(*state).clone()}
                render_item={render_item}
                on_retry={Some(refetch)}
                empty_message={Some("No characters published yet.".to_string())}
                container_class={Some("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6".to_string())}
            />
        </>
    }
}
