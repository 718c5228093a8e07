use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{any, get};
use serde_json::Value;

use super::*;
use crate::config::HostConfig;
use crate::routes::api_routes;

// =============================================================================
// HELPERS
// =============================================================================

async fn echo(request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header_str = |name: HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    };
    let json = serde_json::json!({
        "method": parts.method.as_str(),
        "uri": parts.uri.to_string(),
        "authorization": header_str(header::AUTHORIZATION),
        "contentType": header_str(header::CONTENT_TYPE),
        "body": String::from_utf8_lossy(&body),
    });
    ([(header::CONTENT_TYPE, "application/json")], json.to_string()).into_response()
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "late"
}

fn fake_backend() -> Router {
    Router::new()
        .route("/api/v1/denied", get(|| async { (StatusCode::UNAUTHORIZED, "denied") }))
        .route("/api/v1/slow", get(slow))
        .route("/api/{*path}", any(echo))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn proxy_to(backend_url: &str, timeout: Duration) -> String {
    let config = HostConfig { port: 0, backend_url: backend_url.to_owned(), proxy_timeout: timeout };
    let state = AppState::new(&config).unwrap();
    serve(api_routes(state)).await
}

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn forwardable_headers_drop_hop_by_hop_entries() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let forwarded = forwardable_headers(&headers);
    assert_eq!(forwarded.len(), 2);
    assert_eq!(forwarded.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(forwarded.get(header::HOST).is_none());
}

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("http://127.0.0.1:8080", "/api/v1/board?page=2"),
        "http://127.0.0.1:8080/api/v1/board?page=2"
    );
}

#[test]
fn request_body_errors_map_to_payload_too_large() {
    assert_eq!(ProxyError::RequestBody("too big".to_owned()).status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// END TO END
// =============================================================================

#[tokio::test]
async fn forwards_method_path_query_and_authorization() {
    let backend = serve(fake_backend()).await;
    let proxy = proxy_to(&backend, Duration::from_secs(5)).await;

    let response = reqwest::Client::new()
        .get(format!("{proxy}/api/v1/board?page=2"))
        .header("Authorization", "Bearer abc")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["uri"], "/api/v1/board?page=2");
    assert_eq!(body["authorization"], "Bearer abc");
}

#[tokio::test]
async fn forwards_form_body_without_authorization() {
    let backend = serve(fake_backend()).await;
    let proxy = proxy_to(&backend, Duration::from_secs(5)).await;

    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/v1/login"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("username=kim&password=pw")
        .send()
        .await
        .unwrap();
    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["contentType"], "application/x-www-form-urlencoded");
    assert_eq!(body["body"], "username=kim&password=pw");
    assert_eq!(body["authorization"], "");
}

#[tokio::test]
async fn relays_backend_status_and_body() {
    let backend = serve(fake_backend()).await;
    let proxy = proxy_to(&backend, Duration::from_secs(5)).await;

    let response = reqwest::get(format!("{proxy}/api/v1/denied")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text().await.unwrap(), "denied");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let proxy = proxy_to("http://127.0.0.1:1", Duration::from_secs(5)).await;

    let response = reqwest::get(format!("{proxy}/api/v1/board?page=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let backend = serve(fake_backend()).await;
    let proxy = proxy_to(&backend, Duration::from_secs(1)).await;

    let response = reqwest::get(format!("{proxy}/api/v1/slow")).await.unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn healthz_answers_without_backend() {
    let proxy = proxy_to("http://127.0.0.1:1", Duration::from_secs(1)).await;

    let response = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
