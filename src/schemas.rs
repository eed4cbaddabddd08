use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the upstream leg of the shop proxy
    pub http: reqwest::Client,
    /// Server configuration
    pub config: AppConfig,
}

/// Error body returned when the proxy itself or its upstream fails
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProxyErrorBody {
    /// Stable error summary
    pub error: String,
    /// Underlying failure, for diagnostics
    pub details: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Backend origin the shop proxy forwards to
    pub backend: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::shop_proxy::proxy_shop,
    ),
    components(schemas(ProxyErrorBody, HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "shop-proxy", description = "Cart/session proxy to the backend shop API"),
    ),
    info(
        title = "Animantra Web Server",
        description = "Storefront web server: forwards /api/shop requests to the backend while keeping the cart session cookie same-origin",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
