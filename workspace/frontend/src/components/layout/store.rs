use yew::prelude::*;

use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct StoreLayoutProps {
    pub children: Children,
}

/// Shell for the public storefront pages.
#[function_component(StoreLayout)]
pub fn store_layout(props: &StoreLayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <main class="container mx-auto px-4 py-8">
                {props.children.clone()}
            </main>
        </div>
    }
}
