use serde::{Deserialize, Serialize};

use crate::api_client::{self, query_string, MessageResponse};

/// Category response model
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub children: Option<Vec<CategoryResponse>>,
}

/// Request body for creating or updating a category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponse>,
    #[serde(default)]
    pub total: u64,
}

/// Get all active categories (public)
pub async fn get_categories() -> Result<Vec<CategoryResponse>, String> {
    let response = api_client::get::<CategoryListResponse>("/api/shop/categories").await?;
    Ok(response.categories)
}

/// Get all categories (admin), optionally filtered by parent
pub async fn get_categories_admin(
    parent_id: Option<i64>,
    include_children: bool,
) -> Result<Vec<CategoryResponse>, String> {
    let query = query_string(&[
        ("parent_id", parent_id.map(|id| id.to_string())),
        (
            "include_children",
            include_children.then(|| "true".to_string()),
        ),
    ]);
    let response =
        api_client::get_auth::<CategoryListResponse>(&format!("/api/admin/categories{query}"))
            .await?;
    log::debug!("Fetched {} categories", response.categories.len());
    Ok(response.categories)
}

/// Create a new category
pub async fn create_category(payload: &CategoryPayload) -> Result<CategoryResponse, String> {
    log::debug!("Creating category: {}", payload.name);
    api_client::post_auth("/api/admin/categories", payload).await
}

/// Update a category
pub async fn update_category(
    id: i64,
    payload: &CategoryPayload,
) -> Result<CategoryResponse, String> {
    log::debug!("Updating category {id}");
    api_client::patch_auth(&format!("/api/admin/categories/{id}"), payload).await
}

/// Delete a category
pub async fn delete_category(id: i64) -> Result<MessageResponse, String> {
    log::debug!("Deleting category {id}");
    api_client::delete_auth(&format!("/api/admin/categories/{id}")).await
}
