//! Admin client for the Etsy integration: sync triggers, status, listing
//! link management and inventory sync logs.

use serde::{Deserialize, Serialize};

use crate::api_client::{self, query_string};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EtsyProduct {
    pub id: i64,
    pub listing_id: String,
    /// Local product this listing is linked to, if any
    #[serde(default)]
    pub product_id: Option<i64>,
    pub shop_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// "synced", "pending", "failed" or "unlinked"
    pub sync_status: String,
    #[serde(default)]
    pub last_synced_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EtsyProductListResponse {
    pub products: Vec<EtsyProduct>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyncStatus {
    pub enabled: bool,
    #[serde(default)]
    pub last_product_sync: Option<String>,
    #[serde(default)]
    pub last_inventory_sync: Option<String>,
    pub product_sync_in_progress: bool,
    pub inventory_sync_in_progress: bool,
    pub total_products: u64,
    pub synced_products: u64,
    pub failed_products: u64,
    pub pending_products: u64,
    #[serde(default)]
    pub rate_limit_remaining: Option<u64>,
    #[serde(default)]
    pub rate_limit_reset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventorySyncLog {
    pub id: i64,
    pub listing_id: String,
    #[serde(default)]
    pub variant_id: Option<i64>,
    pub sync_type: String,
    pub direction: String,
    #[serde(default)]
    pub old_quantity: Option<i64>,
    #[serde(default)]
    pub new_quantity: Option<i64>,
    /// "success" or "failed"
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    pub synced_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventorySyncLogResponse {
    pub logs: Vec<InventorySyncLog>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EtsyConfig {
    pub enabled: bool,
    pub api_key_configured: bool,
    #[serde(default)]
    pub shop_id: Option<String>,
    pub rate_limit_enabled: bool,
    pub max_requests_per_day: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncTriggerResponse {
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncTriggerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,
    /// "push", "pull" or "bidirectional"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// Trigger product synchronization
pub async fn trigger_product_sync(
    request: &SyncTriggerRequest,
) -> Result<SyncTriggerResponse, String> {
    log::debug!("Triggering Etsy product sync");
    api_client::post_auth("/api/admin/etsy/sync/products", request).await
}

/// Trigger inventory synchronization
pub async fn trigger_inventory_sync(
    request: &SyncTriggerRequest,
) -> Result<SyncTriggerResponse, String> {
    log::debug!("Triggering Etsy inventory sync");
    api_client::post_auth("/api/admin/etsy/sync/inventory", request).await
}

/// Get synchronization status
pub async fn get_sync_status() -> Result<SyncStatus, String> {
    api_client::get_auth("/api/admin/etsy/sync/status").await
}

/// Get inventory sync logs
pub async fn get_inventory_sync_logs(
    page: Option<u64>,
    per_page: Option<u64>,
    status: Option<String>,
) -> Result<InventorySyncLogResponse, String> {
    let query = query_string(&[
        ("page", page.map(|p| p.to_string())),
        ("per_page", per_page.map(|p| p.to_string())),
        ("status", status),
    ]);
    api_client::get_auth(&format!("/api/admin/etsy/sync/logs{query}")).await
}

/// List Etsy products known to the backend
pub async fn list_etsy_products(
    sync_status: Option<String>,
    page: Option<u64>,
    per_page: Option<u64>,
) -> Result<EtsyProductListResponse, String> {
    let query = query_string(&[
        ("sync_status", sync_status),
        ("page", page.map(|p| p.to_string())),
        ("per_page", per_page.map(|p| p.to_string())),
    ]);
    api_client::get_auth(&format!("/api/admin/etsy/products{query}")).await
}

/// Link an Etsy listing to a local product
pub async fn link_product(listing_id: &str, product_id: i64) -> Result<(), String> {
    log::debug!("Linking listing {listing_id} to product {product_id}");
    api_client::post_auth_unit(
        &format!("/api/admin/etsy/products/{listing_id}/link"),
        &serde_json::json!({ "product_id": product_id }),
    )
    .await
}

/// Unlink an Etsy listing from its local product
pub async fn unlink_product(listing_id: &str) -> Result<(), String> {
    log::debug!("Unlinking listing {listing_id}");
    api_client::delete_auth_unit(&format!("/api/admin/etsy/products/{listing_id}/link")).await
}

/// Get the integration configuration
pub async fn get_config() -> Result<EtsyConfig, String> {
    api_client::get_auth("/api/admin/etsy/config").await
}
