use serde::{Deserialize, Serialize};

use crate::api_client;
use crate::credentials;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Log in and persist the bearer token via the credential store.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = api_client::post("/api/admin/login", &request).await?;
    credentials::with(|c| c.set_admin_token(&response.token));
    log::info!("Admin login succeeded");
    Ok(())
}

/// Drop the stored bearer token.
pub fn logout() {
    credentials::with(|c| c.clear_admin_token());
    log::info!("Admin logged out");
}

/// Whether a bearer token is present. The backend remains the authority; a
/// stale token still yields a 401 on the next call.
pub fn is_logged_in() -> bool {
    credentials::with(|c| c.admin_token().is_some())
}
