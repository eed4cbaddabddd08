//! Admin client for shop management: products, variants, inventory, product
//! images, orders and notifications.

use common::{Address, Product, ProductImage, ProductVariant};
use serde::{Deserialize, Serialize};

use crate::api_client::{self, query_string, MessageResponse};

// ==================== Products ====================

/// Request body for creating a product
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProductRequest {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub base_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etsy_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request body for partially updating a product
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Filters accepted by the admin product listing
#[derive(Debug, Clone, Default)]
pub struct ProductListParams {
    pub status: Option<String>,
    pub category: Option<i64>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// List products with filters and pagination
pub async fn list_products(params: &ProductListParams) -> Result<ProductListResponse, String> {
    let query = query_string(&[
        ("status", params.status.clone()),
        ("category", params.category.map(|id| id.to_string())),
        ("search", params.search.clone()),
        ("page", params.page.map(|p| p.to_string())),
        ("per_page", params.per_page.map(|p| p.to_string())),
    ]);
    api_client::get_auth(&format!("/api/admin/shop/products{query}")).await
}

/// Get a product with its variants and images
pub async fn get_product(id: i64) -> Result<Product, String> {
    api_client::get_auth(&format!("/api/admin/shop/products/{id}")).await
}

/// Create a product
pub async fn create_product(request: &CreateProductRequest) -> Result<Product, String> {
    log::debug!("Creating product: {}", request.title);
    api_client::post_auth("/api/admin/shop/products", request).await
}

/// Partially update a product
pub async fn update_product(id: i64, request: &UpdateProductRequest) -> Result<(), String> {
    log::debug!("Updating product {id}");
    api_client::patch_auth_unit(&format!("/api/admin/shop/products/{id}"), request).await
}

/// Delete a product
pub async fn delete_product(id: i64) -> Result<(), String> {
    log::debug!("Deleting product {id}");
    api_client::delete_auth_unit(&format!("/api/admin/shop/products/{id}")).await
}

// ==================== Variants & inventory ====================

/// Request body for adding or updating a variant
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariantPayload {
    pub sku: String,
    pub name: String,
    /// JSON-encoded attribute map, e.g. {"size":"L"}
    pub attributes: String,
    pub price_adjustment: f64,
    pub stock: i64,
}

/// Add a variant to a product
pub async fn add_variant(product_id: i64, payload: &VariantPayload) -> Result<ProductVariant, String> {
    log::debug!("Adding variant {} to product {product_id}", payload.sku);
    api_client::post_auth(
        &format!("/api/admin/shop/products/{product_id}/variants"),
        payload,
    )
    .await
}

/// Update a variant
pub async fn update_variant(variant_id: i64, payload: &VariantPayload) -> Result<(), String> {
    log::debug!("Updating variant {variant_id}");
    api_client::patch_auth_unit(&format!("/api/admin/shop/variants/{variant_id}"), payload).await
}

/// Stock adjustment: set an absolute value or add/subtract a delta
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryAdjustment {
    pub variant_id: i64,
    pub quantity: i64,
    /// "set", "add" or "subtract"
    pub operation: String,
}

/// Adjust variant inventory
pub async fn adjust_inventory(adjustment: &InventoryAdjustment) -> Result<(), String> {
    log::debug!(
        "Inventory {} {} on variant {}",
        adjustment.operation,
        adjustment.quantity,
        adjustment.variant_id
    );
    api_client::post_auth_unit("/api/admin/shop/inventory/adjust", adjustment).await
}

// ==================== Product images ====================

#[derive(Debug, Clone, Deserialize)]
pub struct ProductImageListResponse {
    pub images: Vec<ProductImage>,
}

/// List a product's images
pub async fn list_product_images(product_id: i64) -> Result<Vec<ProductImage>, String> {
    let response = api_client::get_auth::<ProductImageListResponse>(&format!(
        "/api/admin/shop/products/{product_id}/images"
    ))
    .await?;
    Ok(response.images)
}

/// Request body for reordering or re-captioning an image
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateImageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// Update a product image
pub async fn update_product_image(
    product_id: i64,
    image_id: i64,
    request: &UpdateImageRequest,
) -> Result<MessageResponse, String> {
    api_client::patch_auth(
        &format!("/api/admin/shop/products/{product_id}/images/{image_id}"),
        request,
    )
    .await
}

/// Delete a product image
pub async fn delete_product_image(
    product_id: i64,
    image_id: i64,
) -> Result<MessageResponse, String> {
    api_client::delete_auth(&format!(
        "/api/admin/shop/products/{product_id}/images/{image_id}"
    ))
    .await
}

// ==================== Orders ====================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub variant_id: Option<i64>,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub product_title: String,
    #[serde(default)]
    pub product_sku: String,
    #[serde(default)]
    pub variant_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub customer_email: String,
    pub customer_name: String,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
    /// "pending", "paid", "failed" or "refunded"
    pub payment_status: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    /// "unfulfilled", "fulfilled" or "partially_fulfilled"
    pub fulfillment_status: String,
    pub shipping_address: Address,
    #[serde(default)]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub discount_code: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Filters accepted by the order listing
#[derive(Debug, Clone, Default)]
pub struct OrderListParams {
    pub payment_status: Option<String>,
    pub fulfillment_status: Option<String>,
    pub customer_email: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// List orders with filters and pagination
pub async fn list_orders(params: &OrderListParams) -> Result<OrderListResponse, String> {
    let query = query_string(&[
        ("payment_status", params.payment_status.clone()),
        ("fulfillment_status", params.fulfillment_status.clone()),
        ("customer_email", params.customer_email.clone()),
        ("page", params.page.map(|p| p.to_string())),
        ("per_page", params.per_page.map(|p| p.to_string())),
    ]);
    api_client::get_auth(&format!("/api/admin/shop/orders{query}")).await
}

/// Get a single order with its items
pub async fn get_order(id: i64) -> Result<Order, String> {
    api_client::get_auth(&format!("/api/admin/shop/orders/{id}")).await
}

/// Update an order's fulfillment status
pub async fn update_fulfillment_status(id: i64, status: &str) -> Result<(), String> {
    log::debug!("Setting order {id} fulfillment to {status}");
    api_client::patch_auth_unit(
        &format!("/api/admin/shop/orders/{id}/fulfillment"),
        &serde_json::json!({ "status": status }),
    )
    .await
}

/// Refund an order, fully or for a partial amount
pub async fn refund_order(id: i64, amount: Option<f64>) -> Result<(), String> {
    log::debug!("Refunding order {id}");
    let body = match amount {
        Some(amount) => serde_json::json!({ "amount": amount }),
        None => serde_json::json!({}),
    };
    api_client::post_auth_unit(&format!("/api/admin/shop/orders/{id}/refund"), &body).await
}

// ==================== Notifications ====================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: i64,
    /// "low_stock", "payment_failed", "order_created" or "order_paid"
    #[serde(rename = "type")]
    pub kind: String,
    /// "info", "warning", "error" or "critical"
    pub severity: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub read_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub unread_count: u64,
    pub page: u64,
    pub per_page: u64,
}

/// List notifications
pub async fn list_notifications(
    unread_only: bool,
    page: Option<u64>,
    per_page: Option<u64>,
) -> Result<NotificationListResponse, String> {
    let query = query_string(&[
        ("unread", unread_only.then(|| "true".to_string())),
        ("page", page.map(|p| p.to_string())),
        ("per_page", per_page.map(|p| p.to_string())),
    ]);
    api_client::get_auth(&format!("/api/admin/notifications{query}")).await
}

/// Mark one notification as read
pub async fn mark_notification_read(id: i64) -> Result<(), String> {
    api_client::patch_auth_empty(&format!("/api/admin/notifications/{id}/read")).await
}

/// Mark every notification as read
pub async fn mark_all_notifications_read() -> Result<(), String> {
    api_client::post_auth_unit("/api/admin/notifications/read-all", &serde_json::json!({})).await
}

/// Delete a notification
pub async fn delete_notification(id: i64) -> Result<(), String> {
    api_client::delete_auth_unit(&format!("/api/admin/notifications/{id}")).await
}
