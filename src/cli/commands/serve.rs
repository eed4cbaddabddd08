use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, AppConfig};
use crate::router::create_router;

pub async fn serve(bind_address: Option<String>, backend_url: Option<String>) -> Result<()> {
    trace!("Entering serve function");
    info!("Animantra server starting up");

    let mut config = AppConfig::from_env();
    if let Some(bind) = bind_address {
        config.bind_address = bind;
    }
    if let Some(url) = backend_url {
        config.backend_url = url.trim_end_matches('/').to_string();
    }
    debug!("Bind address: {}", config.bind_address);
    debug!("Backend URL: {}", config.backend_url);

    let bind = config.bind_address.clone();
    let state = initialize_app_state(config);
    let app = create_router(state);
    debug!("Router created successfully");

    info!("Starting server on {}", bind);
    let listener = match TcpListener::bind(&bind).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind, e);
            return Err(e.into());
        }
    };

    info!("Animantra server running on http://{}", bind);
    info!("Swagger UI available at http://{}/swagger-ui", bind);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
