pub mod admin_shop;
pub mod auth;
pub mod category;
pub mod discount;
pub mod etsy;
pub mod fumetto;
pub mod personaggio;
pub mod shop;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::credentials;
use crate::settings;

// API base comes from settings; empty means same-origin.
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Response shape of delete/restore style endpoints.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

fn build(method: &str, endpoint: &str, auth: bool) -> RequestBuilder {
    let url = format!("{}{}", api_base(), endpoint);
    let builder = match method {
        "POST" => Request::post(&url),
        "PATCH" => Request::patch(&url),
        "PUT" => Request::put(&url),
        "DELETE" => Request::delete(&url),
        _ => Request::get(&url),
    };
    let builder = builder.header("Content-Type", "application/json");
    if auth {
        // Absence of a token is not checked here; the backend's 401 is the
        // enforcement point surfaced to the UI.
        match credentials::with(|c| c.admin_token()) {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    } else {
        builder
    }
}

/// Maps transport failures and non-2xx statuses to a message embedding the
/// HTTP status and the raw response body.
async fn handle(
    method: &str,
    endpoint: &str,
    result: Result<Response, gloo_net::Error>,
) -> Result<Response, String> {
    let response = result.map_err(|e| {
        let error_msg = format!("Request failed: {e}");
        log::error!("{} {} - {}", method, endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error_msg = format!("HTTP {status}: {body}");
        log::error!("{} {} - {}", method, endpoint, error_msg);
        return Err(error_msg);
    }

    Ok(response)
}

async fn parse_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let parsed = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {e}");
        log::error!("{} {} - {}", method, endpoint, error_msg);
        error_msg
    })?;
    log::debug!("{} {} - Success", method, endpoint);
    Ok(parsed)
}

async fn send_json<T>(method: &str, endpoint: &str, auth: bool) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let result = build(method, endpoint, auth).send().await;
    let response = handle(method, endpoint, result).await?;
    parse_json(method, endpoint, response).await
}

async fn send_body_json<T, B>(
    method: &str,
    endpoint: &str,
    auth: bool,
    body: &B,
) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = build(method, endpoint, auth).json(body).map_err(|e| {
        let error_msg = format!("Failed to serialize request: {e}");
        log::error!("{} {} - {}", method, endpoint, error_msg);
        error_msg
    })?;
    let response = handle(method, endpoint, request.send().await).await?;
    parse_json(method, endpoint, response).await
}

/// Like [`send_body_json`] but tolerates empty 2xx bodies.
async fn send_body_unit<B>(method: &str, endpoint: &str, auth: bool, body: &B) -> Result<(), String>
where
    B: Serialize,
{
    let request = build(method, endpoint, auth).json(body).map_err(|e| {
        let error_msg = format!("Failed to serialize request: {e}");
        log::error!("{} {} - {}", method, endpoint, error_msg);
        error_msg
    })?;
    handle(method, endpoint, request.send().await).await?;
    log::debug!("{} {} - Success", method, endpoint);
    Ok(())
}

async fn send_unit(method: &str, endpoint: &str, auth: bool) -> Result<(), String> {
    let result = build(method, endpoint, auth).send().await;
    handle(method, endpoint, result).await?;
    log::debug!("{} {} - Success", method, endpoint);
    Ok(())
}

/// Common GET request handler (public endpoints)
pub async fn get<T: DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    send_json("GET", endpoint, false).await
}

/// Common GET request handler (admin endpoints, bearer token attached)
pub async fn get_auth<T: DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    send_json("GET", endpoint, true).await
}

/// Common POST request handler (public endpoints)
pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> Result<T, String> {
    send_body_json("POST", endpoint, false, body).await
}

/// Common POST request handler (admin endpoints)
pub async fn post_auth<T: DeserializeOwned, B: Serialize>(
    endpoint: &str,
    body: &B,
) -> Result<T, String> {
    send_body_json("POST", endpoint, true, body).await
}

/// POST for admin endpoints whose success body is empty or irrelevant
pub async fn post_auth_unit<B: Serialize>(endpoint: &str, body: &B) -> Result<(), String> {
    send_body_unit("POST", endpoint, true, body).await
}

/// Common PUT request handler (admin endpoints)
pub async fn put_auth<T: DeserializeOwned, B: Serialize>(
    endpoint: &str,
    body: &B,
) -> Result<T, String> {
    send_body_json("PUT", endpoint, true, body).await
}

/// Common PATCH request handler (admin endpoints)
pub async fn patch_auth<T: DeserializeOwned, B: Serialize>(
    endpoint: &str,
    body: &B,
) -> Result<T, String> {
    send_body_json("PATCH", endpoint, true, body).await
}

/// PATCH for admin endpoints whose success body is empty or irrelevant
pub async fn patch_auth_unit<B: Serialize>(endpoint: &str, body: &B) -> Result<(), String> {
    send_body_unit("PATCH", endpoint, true, body).await
}

/// PATCH without a body (e.g. mark-as-read)
pub async fn patch_auth_empty(endpoint: &str) -> Result<(), String> {
    send_unit("PATCH", endpoint, true).await
}

/// Common DELETE request handler (admin endpoints)
pub async fn delete_auth<T: DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    send_json("DELETE", endpoint, true).await
}

/// DELETE for admin endpoints whose success body is empty or irrelevant
pub async fn delete_auth_unit(endpoint: &str) -> Result<(), String> {
    send_unit("DELETE", endpoint, true).await
}

/// Builds a query string from present (key, value) pairs; empty when none.
/// Values are percent-encoded, keys are trusted literals.
pub(crate) fn query_string(params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
