#[cfg(test)]
mod integration_tests {
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::schemas::{HealthResponse, ProxyErrorBody};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_with_backend};

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert!(body.backend.starts_with("http://127.0.0.1:"));
    }

    #[tokio::test]
    async fn test_proxy_forwards_cart_session_cookie() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/shop/cart")
            .add_header(header::COOKIE, HeaderValue::from_static("cart_session=abc"))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["cookie"], "cart_session=abc");
    }

    #[tokio::test]
    async fn test_proxy_falls_back_to_session_header() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/shop/cart")
            .add_header(
                "x-cart-session".parse::<axum::http::HeaderName>().unwrap(),
                HeaderValue::from_static("abc"),
            )
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["cookie"], "cart_session=abc");
    }

    #[tokio::test]
    async fn test_proxy_without_session_sends_no_cookie() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/shop/cart").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert!(body["cookie"].is_null());
    }

    #[tokio::test]
    async fn test_proxy_rehomes_upstream_set_cookie() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/shop/cart").await;

        response.assert_status(StatusCode::OK);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("Proxy did not re-emit the session cookie")
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(
            set_cookie,
            "cart_session=xyz; Max-Age=600; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[tokio::test]
    async fn test_proxy_defaults_missing_max_age_to_seven_days() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/shop/session").await;

        response.assert_status(StatusCode::OK);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("Proxy did not re-emit the session cookie")
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.contains("cart_session=fresh"));
        assert!(set_cookie.contains("Max-Age=604800"));
    }

    #[tokio::test]
    async fn test_proxy_forwards_json_body() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/shop/cart/items")
            .json(&json!({ "product_id": 1, "quantity": 2 }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["received"]["product_id"], 1);
        assert_eq!(body["received"]["quantity"], 2);
    }

    #[tokio::test]
    async fn test_proxy_forwards_query_string() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/shop/echo?page=2&per_page=10").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["query"], "page=2&per_page=10");
    }

    #[tokio::test]
    async fn test_proxy_passes_text_bodies_through() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/shop/plain").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "pong");
    }

    #[tokio::test]
    async fn test_proxy_preserves_upstream_status() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/shop/missing").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"], "not found");
    }

    #[tokio::test]
    async fn test_proxy_reports_unreachable_upstream() {
        // Nothing listens on this port; the upstream leg must fail.
        let app = setup_test_app_with_backend("http://127.0.0.1:1".to_string());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/shop/cart").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ProxyErrorBody = response.json();
        assert_eq!(body.error, "internal proxy error");
        assert!(!body.details.is_empty());
    }
}
