//! Cart/session proxy for the storefront.
//!
//! The browser talks to `/api/shop/*` on this origin; the shop API lives on
//! another origin. A plain rewrite would lose the backend's `Set-Cookie`
//! header, so the guest cart would not survive a second request. This handler
//! forwards the request upstream with the `cart_session` cookie re-attached,
//! then re-emits any upstream `Set-Cookie` as a same-origin cookie.

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::schemas::{AppState, ProxyErrorBody};

/// Session cookie issued by the backend and echoed on every cart request.
pub const CART_SESSION_COOKIE: &str = "cart_session";

/// Header fallback for contexts where the browser cannot carry cookies.
pub const CART_SESSION_HEADER: &str = "x-cart-session";

/// Applied when the upstream cookie carries no Max-Age: 7 days.
const DEFAULT_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned malformed JSON: {0}")]
    MalformedJson(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        warn!("Shop proxy error: {}", self);
        let body = ProxyErrorBody {
            error: "internal proxy error".to_string(),
            details: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Forward a shop request to the backend, bridging the session cookie.
///
/// Registered for GET, POST, PATCH and DELETE under `/api/shop/*path`.
#[utoipa::path(
    get,
    path = "/api/shop/{path}",
    tag = "shop-proxy",
    params(
        ("path" = String, Path, description = "Shop API path to forward, e.g. `cart` or `products`"),
    ),
    responses(
        (status = 200, description = "Upstream response, forwarded with its original status"),
        (status = 500, description = "Upstream unreachable or returned a malformed body", body = ProxyErrorBody)
    )
)]
#[instrument(skip_all, fields(%method, %path))]
pub async fn proxy_shop(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let mut url = format!("{}/api/shop/{}", state.config.backend_url, path);
    if let Some(query) = query.as_deref().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    debug!("Forwarding {} {}", method, url);

    let mut request = state
        .http
        .request(upstream_method(&method), &url)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(session) = session_token(&headers) {
        debug!("Forwarding cart session ({} chars)", session.len());
        request = request.header(header::COOKIE, format!("{CART_SESSION_COOKIE}={session}"));
    }

    if matches!(method, Method::POST | Method::PATCH) && !body.is_empty() {
        request = request.body(body.to_vec());
    }

    let upstream = request.send().await?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let set_cookie = upstream
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let is_json = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.contains("application/json"));

    let mut response = if is_json {
        let value: Value = upstream.json().await.map_err(ProxyError::MalformedJson)?;
        (status, Json(value)).into_response()
    } else {
        // Non-JSON upstream bodies pass through as text.
        let text = upstream.text().await?;
        (status, text).into_response()
    };

    if let Some(raw) = set_cookie {
        if let Some(cookie) = SessionCookie::parse(&raw) {
            debug!(
                "Re-homing cookie {} (Max-Age={})",
                cookie.name, cookie.max_age
            );
            if let Ok(value) = HeaderValue::from_str(&cookie.to_header_value()) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
    }

    info!("Shop proxy completed with status {}", status);
    Ok(response)
}

fn upstream_method(method: &Method) -> reqwest::Method {
    reqwest::Method::from_bytes(method.as_str().as_bytes()).unwrap_or(reqwest::Method::GET)
}

/// Session token from the `cart_session` cookie, falling back to the
/// `X-Cart-Session` header.
fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(cookies) = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
    {
        for pair in cookies.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == CART_SESSION_COOKIE && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    headers
        .get(CART_SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// The parts of an upstream `Set-Cookie` that survive re-homing. Attributes
/// other than Max-Age are replaced with same-origin ones.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionCookie {
    name: String,
    value: String,
    max_age: i64,
}

impl SessionCookie {
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(';');
        let (name, value) = parts.next()?.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let max_age = parts
            .filter_map(|attribute| {
                let (key, value) = attribute.split_once('=')?;
                if key.trim().eq_ignore_ascii_case("max-age") {
                    value.trim().parse::<i64>().ok()
                } else {
                    None
                }
            })
            .next()
            .unwrap_or(DEFAULT_COOKIE_MAX_AGE_SECS);

        Some(Self {
            name: name.to_string(),
            value: value.trim().to_string(),
            max_age,
        })
    }

    fn to_header_value(&self) -> String {
        format!(
            "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
            self.name, self.value, self.max_age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_value_and_max_age() {
        let cookie = SessionCookie::parse("cart_session=xyz; Max-Age=600; Path=/").unwrap();
        assert_eq!(cookie.name, "cart_session");
        assert_eq!(cookie.value, "xyz");
        assert_eq!(cookie.max_age, 600);
    }

    #[test]
    fn max_age_is_case_insensitive() {
        let cookie = SessionCookie::parse("cart_session=xyz; max-age=42").unwrap();
        assert_eq!(cookie.max_age, 42);
    }

    #[test]
    fn missing_max_age_defaults_to_seven_days() {
        let cookie = SessionCookie::parse("cart_session=xyz; Path=/; HttpOnly").unwrap();
        assert_eq!(cookie.max_age, 604_800);
    }

    #[test]
    fn rejects_attribute_only_headers() {
        assert!(SessionCookie::parse("garbage-without-equals").is_none());
        assert!(SessionCookie::parse("=value").is_none());
    }

    #[test]
    fn rebuilt_header_is_same_origin_scoped() {
        let cookie = SessionCookie::parse("cart_session=xyz; Max-Age=600; Domain=api.example.com")
            .unwrap();
        assert_eq!(
            cookie.to_header_value(),
            "cart_session=xyz; Max-Age=600; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(
                name.parse::<axum::http::HeaderName>().unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        headers
    }

    #[test]
    fn session_token_reads_the_cart_cookie() {
        let headers = header_map(&[("cookie", "theme=dark; cart_session=abc")]);
        assert_eq!(session_token(&headers), Some("abc".to_string()));
    }

    #[test]
    fn session_token_falls_back_to_header() {
        let headers = header_map(&[("x-cart-session", "abc")]);
        assert_eq!(session_token(&headers), Some("abc".to_string()));
    }

    #[test]
    fn cookie_wins_over_header_fallback() {
        let headers = header_map(&[
            ("cookie", "cart_session=from-cookie"),
            ("x-cart-session", "from-header"),
        ]);
        assert_eq!(session_token(&headers), Some("from-cookie".to_string()));
    }

    #[test]
    fn absent_session_yields_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        let headers = header_map(&[("cookie", "theme=dark")]);
        assert_eq!(session_token(&headers), None);
    }
}
