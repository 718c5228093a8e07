//! Outbound request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through [`ApiClient`]. The client lives for the
//! whole app while the session changes underneath it, so the bearer token is
//! read when a request is dispatched, never when the client is built.
//!
//! Client-side (hydrate): requests are sent with `gloo-net`.
//! Server-side (SSR) and native builds only prepare requests.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use crate::state::session::{Session, SessionStore};

#[cfg(feature = "hydrate")]
use super::cancel::CancelToken;
#[cfg(feature = "hydrate")]
use super::error::ApiError;

/// Base path of the backend API.
pub const API_BASE: &str = "/api/v1";

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON: &str = "application/json";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
impl Method {
    fn as_gloo(self) -> gloo_net::http::Method {
        match self {
            Self::Get => gloo_net::http::Method::GET,
            Self::Post => gloo_net::http::Method::POST,
            Self::Put => gloo_net::http::Method::PUT,
            Self::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

/// One HTTP call before it is handed to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    headers: Vec<(String, String)>,
}

impl OutboundRequest {
    /// New request carrying the default JSON content type.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![(CONTENT_TYPE.to_owned(), JSON.to_owned())],
        }
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Header value, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set `name`, replacing any existing value.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.remove_header(name);
        self.headers.push((name.to_owned(), value.to_owned()));
    }

    pub fn remove_header(&mut self, name: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }
}

/// Request payload.
pub enum RequestBody {
    Empty,
    Json(String),
    /// `application/x-www-form-urlencoded` body.
    Form(String),
    /// Browser multipart form; the browser supplies the boundary header.
    #[cfg(feature = "hydrate")]
    Multipart(web_sys::FormData),
}

impl RequestBody {
    /// Adjust the content type header for this body.
    pub fn apply_content_type(&self, request: &mut OutboundRequest) {
        match self {
            Self::Empty | Self::Json(_) => {}
            Self::Form(_) => request.set_header(CONTENT_TYPE, FORM_URLENCODED),
            #[cfg(feature = "hydrate")]
            Self::Multipart(_) => request.remove_header(CONTENT_TYPE),
        }
    }
}

/// Set `Authorization: Bearer <token>` when `session` holds a token.
pub fn attach_authorization(request: &mut OutboundRequest, session: &Session) {
    if let Some(bearer) = session.bearer() {
        request.set_header(AUTHORIZATION, &bearer);
    }
}

/// Process-wide request pipeline handle.
#[derive(Clone, Copy, Debug)]
pub struct ApiClient {
    session: SessionStore,
    base: &'static str,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self { session, base: API_BASE }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn request(&self, method: Method, path: &str) -> OutboundRequest {
        OutboundRequest::new(method, self.url(path))
    }

    /// Attach credentials from the session as it is right now.
    pub fn prepare(&self, mut request: OutboundRequest) -> OutboundRequest {
        attach_authorization(&mut request, &self.session.snapshot());
        request
    }

    /// Dispatch `request` and return the successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response arrives, a status error
    /// for non-2xx responses, and [`ApiError::Cancelled`] when `cancel` fired
    /// while the request was in flight.
    #[cfg(feature = "hydrate")]
    pub async fn send(
        &self,
        request: OutboundRequest,
        body: RequestBody,
        cancel: &CancelToken,
    ) -> Result<gloo_net::http::Response, ApiError> {
        cancel.guard(())?;
        let mut request = self.prepare(request);
        body.apply_content_type(&mut request);

        let mut builder = gloo_net::http::RequestBuilder::new(&request.url).method(request.method.as_gloo());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        let pending = match body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(raw) | RequestBody::Form(raw) => builder.body(raw),
            RequestBody::Multipart(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = pending.send().await.map_err(|e| ApiError::Network(e.to_string()));
        let resp = cancel.guard(resp)??;
        if !resp.ok() {
            leptos::logging::warn!("{:?} {} failed: {}", request.method, request.url, resp.status());
            return Err(ApiError::from_status(resp.status()));
        }
        Ok(resp)
    }

    /// Dispatch `request` and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`], plus [`ApiError::Decode`] for bodies that
    /// do not match `T`.
    #[cfg(feature = "hydrate")]
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: OutboundRequest,
        body: RequestBody,
        cancel: &CancelToken,
    ) -> Result<T, ApiError> {
        let resp = self.send(request, body, cancel).await?;
        let decoded = resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()));
        cancel.guard(decoded)?
    }
}
