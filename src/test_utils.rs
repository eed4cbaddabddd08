#[cfg(test)]
pub mod test_utils {
    use axum::extract::RawQuery;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::config::AppConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;

    /// Stub shop backend: echoes what the proxy forwarded so tests can
    /// assert on cookies, bodies and query strings.
    fn stub_backend_router() -> Router {
        async fn cart(headers: HeaderMap) -> impl IntoResponse {
            let cookie = headers
                .get(header::COOKIE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let mut response_headers = HeaderMap::new();
            response_headers.insert(
                header::SET_COOKIE,
                "cart_session=xyz; Max-Age=600; Path=/".parse().unwrap(),
            );
            (
                response_headers,
                Json(json!({ "cookie": cookie, "items": [] })),
            )
        }

        async fn session_without_age() -> impl IntoResponse {
            let mut response_headers = HeaderMap::new();
            response_headers.insert(header::SET_COOKIE, "cart_session=fresh".parse().unwrap());
            (response_headers, Json(json!({ "ok": true })))
        }

        async fn add_item(body: Json<Value>) -> Json<Value> {
            Json(json!({ "received": body.0 }))
        }

        async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
            Json(json!({ "query": query }))
        }

        async fn plain() -> impl IntoResponse {
            ([(header::CONTENT_TYPE, "text/plain")], "pong")
        }

        async fn missing() -> impl IntoResponse {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
        }

        Router::new()
            .route("/api/shop/cart", get(cart))
            .route("/api/shop/session", get(session_without_age))
            .route("/api/shop/cart/items", post(add_item))
            .route("/api/shop/echo", get(echo_query))
            .route("/api/shop/plain", get(plain))
            .route("/api/shop/missing", get(missing))
    }

    /// Bind the stub backend on an ephemeral port and return its origin.
    pub async fn spawn_stub_backend() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Stub backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, stub_backend_router())
                .await
                .expect("Stub backend crashed");
        });
        format!("http://{addr}")
    }

    /// Build the real router pointed at an arbitrary backend origin.
    pub fn setup_test_app_with_backend(backend_url: String) -> Router {
        let config = AppConfig {
            bind_address: "127.0.0.1:0".to_string(),
            backend_url,
        };
        create_router(AppState {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create the axum app under test, wired to a fresh stub backend.
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let backend_url = spawn_stub_backend().await;
        setup_test_app_with_backend(backend_url)
    }
}
