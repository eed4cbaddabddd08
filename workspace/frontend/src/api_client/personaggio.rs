use serde::{Deserialize, Serialize};

use crate::api_client::{self, MessageResponse};

/// Personaggio response model. The backend serializes camelCase.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaggioResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub background_type: Option<String>,
    #[serde(default)]
    pub gradient_from: Option<String>,
    #[serde(default)]
    pub gradient_to: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// Request body for creating or fully updating a personaggio
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaggioPayload {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonaggiListResponse {
    pub personaggi: Vec<PersonaggioResponse>,
    pub count: u64,
}

/// Get all active personaggi (public)
pub async fn get_personaggi() -> Result<Vec<PersonaggioResponse>, String> {
    let response = api_client::get::<PersonaggiListResponse>("/api/personaggi").await?;
    log::debug!("Fetched {} personaggi", response.count);
    Ok(response.personaggi)
}

/// Get all personaggi including soft-deleted ones (admin)
pub async fn get_personaggi_admin() -> Result<Vec<PersonaggioResponse>, String> {
    let response =
        api_client::get_auth::<PersonaggiListResponse>("/api/personaggi?include_deleted=true")
            .await?;
    Ok(response.personaggi)
}

/// Create a new personaggio
pub async fn create_personaggio(
    payload: &PersonaggioPayload,
) -> Result<PersonaggioResponse, String> {
    log::debug!("Creating personaggio: {}", payload.name);
    api_client::post_auth("/api/personaggi", payload).await
}

/// Fully update an existing personaggio
pub async fn update_personaggio(
    id: i64,
    payload: &PersonaggioPayload,
) -> Result<PersonaggioResponse, String> {
    log::debug!("Updating personaggio {id}");
    api_client::put_auth(&format!("/api/personaggi/{id}"), payload).await
}

/// Soft delete a personaggio
pub async fn delete_personaggio(id: i64) -> Result<MessageResponse, String> {
    log::debug!("Deleting personaggio {id}");
    api_client::delete_auth(&format!("/api/personaggi/{id}")).await
}

/// Restore a soft-deleted personaggio
pub async fn restore_personaggio(id: i64) -> Result<PersonaggioResponse, String> {
    log::debug!("Restoring personaggio {id}");
    api_client::post_auth(&format!("/api/personaggi/{id}/restore"), &serde_json::json!({})).await
}
