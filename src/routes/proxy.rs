//! `/api/*` pass-through to the board backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks only to this host, so every backend call is
//! same-origin. Requests are forwarded verbatim (method, path, query,
//! headers including `Authorization`, and body) and the backend's answer is
//! relayed unchanged. Hop-by-hop headers are dropped in both directions.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Largest request body forwarded. Attachments are capped at 2MB client side.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    header::HOST,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name) || name.as_str() == "keep-alive" || *name == header::CONTENT_LENGTH
}

/// Copy of `headers` without hop-by-hop entries and without the length,
/// which the outgoing client recomputes from the buffered body.
fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    format!("{backend_url}{path_and_query}")
}

/// `ANY /api/{*path}`: relay the request to the backend.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_owned(), ToString::to_string);
    let url = upstream_url(&state.backend_url, &path_and_query);
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::RequestBody(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, "proxying request");
    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(%status, %url, "backend returned server error");
    }

    let mut response = (status, Body::from(bytes)).into_response();
    response.headers_mut().extend(headers);
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
