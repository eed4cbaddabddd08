use serde::{Deserialize, Serialize};

use crate::api_client::{self, MessageResponse};

/// Fumetto response model. The backend serializes camelCase.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FumettoResponse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Page images in reading order.
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// Request body for creating or fully updating a fumetto
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FumettoPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub pages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FumettiListResponse {
    pub fumetti: Vec<FumettoResponse>,
    pub count: u64,
}

/// Get all active fumetti (public)
pub async fn get_fumetti() -> Result<Vec<FumettoResponse>, String> {
    let response = api_client::get::<FumettiListResponse>("/api/fumetti").await?;
    log::debug!("Fetched {} fumetti", response.count);
    Ok(response.fumetti)
}

/// Create a new fumetto
pub async fn create_fumetto(payload: &FumettoPayload) -> Result<FumettoResponse, String> {
    log::debug!("Creating fumetto: {}", payload.title);
    api_client::post_auth("/api/fumetti", payload).await
}

/// Fully update an existing fumetto
pub async fn update_fumetto(id: i64, payload: &FumettoPayload) -> Result<FumettoResponse, String> {
    log::debug!("Updating fumetto {id}");
    api_client::put_auth(&format!("/api/fumetti/{id}"), payload).await
}

/// Soft delete a fumetto
pub async fn delete_fumetto(id: i64) -> Result<MessageResponse, String> {
    log::debug!("Deleting fumetto {id}");
    api_client::delete_auth(&format!("/api/fumetti/{id}")).await
}
