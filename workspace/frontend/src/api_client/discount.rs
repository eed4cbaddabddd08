use serde::{Deserialize, Serialize};

use crate::api_client::{self, query_string};

/// Discount code model
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Discount {
    pub id: i64,
    pub code: String,
    /// "percentage" or "fixed_amount"
    #[serde(rename = "type")]
    pub discount_type: String,
    pub value: f64,
    #[serde(default)]
    pub min_purchase: Option<f64>,
    #[serde(default)]
    pub max_uses: Option<i64>,
    #[serde(default)]
    pub used_count: i64,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Request body for creating or updating a discount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountPayload {
    pub code: String,
    #[serde(rename = "type")]
    pub discount_type: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase: Option<f64>,
    pub max_uses: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    pub expires_at: Option<String>,
    pub active: bool,
}

impl Default for DiscountPayload {
    fn default() -> Self {
        Self {
            code: String::new(),
            discount_type: "percentage".to_string(),
            value: 0.0,
            min_purchase: None,
            max_uses: None,
            starts_at: None,
            expires_at: None,
            active: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscountListResponse {
    pub discounts: Vec<Discount>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Discount plus whether it is currently redeemable
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountWithValidity {
    pub discount: Discount,
    pub is_valid: bool,
}

/// Usage statistics for one discount
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountStats {
    pub discount: Discount,
    pub is_valid: bool,
    pub used_count: i64,
    /// -1 for unlimited
    pub remaining_uses: i64,
    pub days_until_expiry: Option<i64>,
}

/// Get all discounts with pagination and filters
pub async fn get_discounts(
    page: u64,
    per_page: u64,
    active: Option<bool>,
) -> Result<DiscountListResponse, String> {
    let query = query_string(&[
        ("page", Some(page.to_string())),
        ("per_page", Some(per_page.to_string())),
        ("active", active.map(|a| a.to_string())),
    ]);
    let response =
        api_client::get_auth::<DiscountListResponse>(&format!("/api/admin/discounts{query}"))
            .await?;
    log::debug!(
        "Fetched {} of {} discounts",
        response.discounts.len(),
        response.total
    );
    Ok(response)
}

/// Get usage statistics for a discount
pub async fn get_discount_stats(id: i64) -> Result<DiscountStats, String> {
    api_client::get_auth(&format!("/api/admin/discounts/{id}/stats")).await
}

/// Create a new discount
pub async fn create_discount(payload: &DiscountPayload) -> Result<DiscountWithValidity, String> {
    log::debug!("Creating discount: {}", payload.code);
    api_client::post_auth("/api/admin/discounts", payload).await
}

/// Update a discount
pub async fn update_discount(
    id: i64,
    payload: &DiscountPayload,
) -> Result<DiscountWithValidity, String> {
    log::debug!("Updating discount {id}");
    api_client::patch_auth(&format!("/api/admin/discounts/{id}"), payload).await
}

/// Delete a discount
pub async fn delete_discount(id: i64) -> Result<(), String> {
    log::debug!("Deleting discount {id}");
    api_client::delete_auth_unit(&format!("/api/admin/discounts/{id}")).await
}
