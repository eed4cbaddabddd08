use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    #[prop_or_default]
    pub action_label: Option<String>,
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
}

/// Admin page heading with an optional primary action (usually "Add ...").
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex justify-between items-center mb-4">
            <h2 class="text-2xl font-bold">{&props.title}</h2>
            {match (&props.action_label, &props.on_action) {
                (Some(label), Some(on_action)) => {
                    let on_action = on_action.clone();
                    html! {
                        <button
                            class="btn btn-primary btn-sm"
                            onclick={Callback::from(move |_| on_action.emit(()))}
                        >
                            <i class="fas fa-plus"></i> {format!(" {label}")}
                        </button>
                    }
                }
                _ => html! {},
            }}
        </div>
    }
}
