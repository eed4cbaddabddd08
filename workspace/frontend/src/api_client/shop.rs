//! Public shop client: catalog, cart and checkout.
//!
//! Requests go to same-origin `/api/shop/*` so the server-side proxy can
//! bridge the session cookie to the backend. Cookies ride along via request
//! credentials; the session is additionally mirrored into an
//! `X-Cart-Session` header as a fallback transport.

use common::{
    CartView, CheckoutRequest, CheckoutResponse, DiscountApplication, Product,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api_client::query_string;
use crate::credentials;
use crate::settings;

const SHOP_BASE: &str = "/api/shop";

#[derive(Debug, Clone, Deserialize)]
pub struct ShopProductListResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Filters accepted by the public catalog listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogParams {
    pub search: Option<String>,
    pub category: Option<i64>,
    pub in_stock: Option<bool>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

fn shop_url(endpoint: &str) -> String {
    format!(
        "{}{}{}",
        settings::get_settings().api_base_url(),
        SHOP_BASE,
        endpoint
    )
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("Content-Type", "application/json")
        .credentials(web_sys::RequestCredentials::Include);
    match credentials::with(|c| c.cart_session()) {
        Some(session) => builder.header("X-Cart-Session", &session),
        None => builder,
    }
}

/// Cart endpoints report errors as `{"error": ...}`; prefer that message
/// over the raw status line when present.
async fn into_result<T>(endpoint: &str, response: Response) -> Result<T, String>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"].as_str().map(str::to_owned))
            .unwrap_or_else(|| format!("HTTP {status}: {body}"));
        log::error!("Shop {} - {}", endpoint, message);
        return Err(message);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

async fn shop_get<T: DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    let response = with_session(Request::get(&shop_url(endpoint)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;
    into_result(endpoint, response).await
}

async fn shop_send<T, B>(method: &str, endpoint: &str, body: Option<&B>) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = shop_url(endpoint);
    let builder = match method {
        "PATCH" => Request::patch(&url),
        "DELETE" => Request::delete(&url),
        _ => Request::post(&url),
    };
    let builder = with_session(builder);
    let response = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {e}"))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| format!("Request failed: {e}"))?;
    into_result(endpoint, response).await
}

// ==================== Catalog ====================

/// List published products with filters and pagination
pub async fn list_products(params: &CatalogParams) -> Result<ShopProductListResponse, String> {
    let query = query_string(&[
        ("search", params.search.clone()),
        ("category", params.category.map(|id| id.to_string())),
        ("in_stock", params.in_stock.map(|v| v.to_string())),
        ("page", params.page.map(|p| p.to_string())),
        ("per_page", params.per_page.map(|p| p.to_string())),
        ("sort_by", params.sort_by.clone()),
        ("sort_order", params.sort_order.clone()),
    ]);
    shop_get(&format!("/products{query}")).await
}

/// Get a product by slug
pub async fn get_product(slug: &str) -> Result<Product, String> {
    shop_get(&format!("/products/{slug}")).await
}

// ==================== Cart ====================

/// Get the current cart
pub async fn get_cart() -> Result<CartView, String> {
    shop_get("/cart").await
}

#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<i64>,
    pub quantity: u32,
}

/// Add an item to the cart
pub async fn add_to_cart(request: &AddToCartRequest) -> Result<CartView, String> {
    log::debug!("Adding product {} to cart", request.product_id);
    shop_send("POST", "/cart/items", Some(request)).await
}

/// Change a cart item's quantity
pub async fn update_cart_item(item_id: i64, quantity: u32) -> Result<CartView, String> {
    shop_send(
        "PATCH",
        &format!("/cart/items/{item_id}"),
        Some(&serde_json::json!({ "quantity": quantity })),
    )
    .await
}

/// Remove an item from the cart
pub async fn remove_cart_item(item_id: i64) -> Result<(), String> {
    log::debug!("Removing cart item {item_id}");
    shop_send::<serde_json::Value, ()>("DELETE", &format!("/cart/items/{item_id}"), None).await?;
    Ok(())
}

/// Empty the cart
pub async fn clear_cart() -> Result<(), String> {
    log::debug!("Clearing cart");
    shop_send::<serde_json::Value, ()>("DELETE", "/cart", None).await?;
    Ok(())
}

// ==================== Checkout ====================

/// Apply a discount code to the cart
pub async fn apply_discount(code: &str) -> Result<DiscountApplication, String> {
    shop_send(
        "POST",
        "/cart/discount",
        Some(&serde_json::json!({ "code": code })),
    )
    .await
}

/// Process checkout. The session token from the cookie is attached when the
/// caller did not provide one.
pub async fn checkout(mut request: CheckoutRequest) -> Result<CheckoutResponse, String> {
    if request.session_token.is_none() {
        request.session_token = credentials::with(|c| c.cart_session());
    }
    shop_send("POST", "/checkout", Some(&request)).await
}
