use crate::schemas::AppState;

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the server binds to.
    pub bind_address: String,
    /// Origin of the backend API the shop proxy forwards to.
    pub backend_url: String,
}

impl AppConfig {
    /// Loads configuration from the environment, with development defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            bind_address,
            backend_url,
        }
    }
}

/// Initialize application state shared across handlers.
pub fn initialize_app_state(config: AppConfig) -> AppState {
    tracing::info!("Proxying shop requests to {}", config.backend_url);
    AppState {
        http: reqwest::Client::new(),
        config,
    }
}
