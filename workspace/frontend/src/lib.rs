use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod credentials;
pub mod hooks;
pub mod settings;

use crate::common::toast::ToastProvider;
use components::cart::CartPage;
use components::categories::AdminCategories;
use components::checkout::CheckoutPage;
use components::dashboard::AdminDashboard;
use components::discounts::AdminDiscounts;
use components::etsy::AdminEtsy;
use components::fumetti::AdminFumetti;
use components::gallery::{FumettiGallery, PersonaggiGallery};
use components::layout::admin::AdminLayout;
use components::layout::store::StoreLayout;
use components::login::AdminLogin;
use components::notifications::AdminNotifications;
use components::orders::AdminOrders;
use components::personaggi::AdminPersonaggi;
use components::products::AdminProducts;
use components::shop::{ShopCatalog, ShopProductDetail};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/shop")]
    Shop,
    #[at("/shop/:slug")]
    ShopProduct { slug: String },
    #[at("/cart")]
    Cart,
    #[at("/checkout")]
    Checkout,
    #[at("/personaggi")]
    Personaggi,
    #[at("/fumetti")]
    Fumetti,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/personaggi")]
    AdminPersonaggi,
    #[at("/admin/fumetti")]
    AdminFumetti,
    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/discounts")]
    AdminDiscounts,
    #[at("/admin/products")]
    AdminProducts,
    #[at("/admin/orders")]
    AdminOrders,
    #[at("/admin/notifications")]
    AdminNotifications,
    #[at("/admin/etsy")]
    AdminEtsy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Home | Route::Shop => {
            html! { <StoreLayout><ShopCatalog /></StoreLayout> }
        }
        Route::ShopProduct { slug } => {
            html! { <StoreLayout><ShopProductDetail slug={slug} /></StoreLayout> }
        }
        Route::Cart => {
            html! { <StoreLayout><CartPage /></StoreLayout> }
        }
        Route::Checkout => {
            html! { <StoreLayout><CheckoutPage /></StoreLayout> }
        }
        Route::Personaggi => {
            html! { <StoreLayout><PersonaggiGallery /></StoreLayout> }
        }
        Route::Fumetti => {
            html! { <StoreLayout><FumettiGallery /></StoreLayout> }
        }
        Route::AdminLogin => {
            html! { <AdminLogin /> }
        }
        Route::AdminDashboard => {
            html! { <AdminLayout title="Dashboard"><AdminDashboard /></AdminLayout> }
        }
        Route::AdminPersonaggi => {
            html! { <AdminLayout title="Personaggi"><AdminPersonaggi /></AdminLayout> }
        }
        Route::AdminFumetti => {
            html! { <AdminLayout title="Fumetti"><AdminFumetti /></AdminLayout> }
        }
        Route::AdminCategories => {
            html! { <AdminLayout title="Categories"><AdminCategories /></AdminLayout> }
        }
        Route::AdminDiscounts => {
            html! { <AdminLayout title="Discounts"><AdminDiscounts /></AdminLayout> }
        }
        Route::AdminProducts => {
            html! { <AdminLayout title="Shop Products"><AdminProducts /></AdminLayout> }
        }
        Route::AdminOrders => {
            html! { <AdminLayout title="Shop Orders"><AdminOrders /></AdminLayout> }
        }
        Route::AdminNotifications => {
            html! { <AdminLayout title="Notifications"><AdminNotifications /></AdminLayout> }
        }
        Route::AdminEtsy => {
            html! { <AdminLayout title="Etsy Sync"><AdminEtsy /></AdminLayout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <StoreLayout><h1 class="text-3xl font-bold">{"404 Not Found"}</h1></StoreLayout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings first: the logger level comes from them
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Animantra Frontend Starting ===");
    log::debug!("Settings: {:?}", settings);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized");
}
