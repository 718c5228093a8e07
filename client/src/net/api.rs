//! Backend calls for login, board CRUD and the gallery.
//!
//! Client-side (hydrate): real HTTP calls through [`ApiClient`].
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics and turn failures into
//! alerts. Mutations hand back the raw envelope so the page can tell a
//! transport failure from a `resultCode` rejection.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::cancel::CancelToken;
use super::error::ApiError;
use super::pipeline::ApiClient;
#[cfg(feature = "hydrate")]
use super::pipeline::{Method, RequestBody};
use super::types::{BoardDetail, BoardPage, Envelope, GalleryPage, LoginContent};
use crate::forms::{BoardForm, Credentials};
use crate::state::gallery::GalleryQuery;

/// Response of a board mutation.
pub type MutationResult = Result<Envelope<serde_json::Value>, ApiError>;

#[cfg(any(test, feature = "hydrate"))]
fn board_list_endpoint(page: usize) -> String {
    format!("/board?page={page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn board_endpoint(brd_id: i64) -> String {
    format!("/board/{brd_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn board_file_endpoint(bf_id: i64) -> String {
    format!("/board/file/{bf_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn gallery_endpoint(query: &GalleryQuery, page: u32) -> String {
    format!("/gallery?{}", query.query_string(page))
}

/// Text fields of a board multipart body, in submission order.
#[cfg(any(test, feature = "hydrate"))]
fn board_fields(brd_id: Option<i64>, form: &BoardForm) -> Vec<(&'static str, String)> {
    let mut fields = Vec::with_capacity(3);
    if let Some(brd_id) = brd_id {
        fields.push(("brdId", brd_id.to_string()));
    }
    fields.push(("title", form.title.clone()));
    fields.push(("contents", form.contents.clone()));
    fields
}

/// Validated board input plus the picked file, if any.
pub struct BoardUpload {
    pub form: BoardForm,
    #[cfg(feature = "hydrate")]
    pub file: Option<web_sys::File>,
}

#[cfg(feature = "hydrate")]
fn multipart(brd_id: Option<i64>, upload: &BoardUpload) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let data = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in board_fields(brd_id, &upload.form) {
        data.append_with_str(name, &value).map_err(js_err)?;
    }
    if let Some(file) = &upload.file {
        data.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_err)?;
    }
    Ok(data)
}

/// Exchange credentials for a session payload via `POST /login`.
///
/// # Errors
///
/// Returns [`ApiError::Authentication`] on 401 and the usual status,
/// network, and envelope errors otherwise.
pub async fn login(client: ApiClient, credentials: &Credentials, cancel: &CancelToken) -> Result<LoginContent, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RequestBody::Form(crate::forms::encode_login_form(credentials));
        let envelope: Envelope<LoginContent> = client
            .send_json(client.request(Method::Post, "/login"), body, cancel)
            .await?;
        envelope.into_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, credentials, cancel);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of the board list via `GET /board?page=N`.
///
/// # Errors
///
/// Returns status, network, decode, and envelope errors.
pub async fn list_boards(client: ApiClient, page: usize, cancel: &CancelToken) -> Result<BoardPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = client.request(Method::Get, &board_list_endpoint(page));
        let envelope: Envelope<BoardPage> = client.send_json(request, RequestBody::Empty, cancel).await?;
        envelope.into_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, page, cancel);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single board entry via `GET /board/{id}`.
///
/// # Errors
///
/// Returns status, network, decode, and envelope errors.
pub async fn fetch_board(client: ApiClient, brd_id: i64, cancel: &CancelToken) -> Result<BoardDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = client.request(Method::Get, &board_endpoint(brd_id));
        let envelope: Envelope<BoardDetail> = client.send_json(request, RequestBody::Empty, cancel).await?;
        envelope.into_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, brd_id, cancel);
        Err(ApiError::Unavailable)
    }
}

/// Create a board entry via multipart `POST /board`.
///
/// # Errors
///
/// Returns status, network, and decode errors.
pub async fn create_board(client: ApiClient, upload: BoardUpload, cancel: &CancelToken) -> MutationResult {
    #[cfg(feature = "hydrate")]
    {
        let body = RequestBody::Multipart(multipart(None, &upload)?);
        client
            .send_json(client.request(Method::Post, "/board"), body, cancel)
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, upload, cancel);
        Err(ApiError::Unavailable)
    }
}

/// Update a board entry via multipart `PUT /board`.
///
/// # Errors
///
/// Returns status, network, and decode errors.
pub async fn update_board(client: ApiClient, brd_id: i64, upload: BoardUpload, cancel: &CancelToken) -> MutationResult {
    #[cfg(feature = "hydrate")]
    {
        let body = RequestBody::Multipart(multipart(Some(brd_id), &upload)?);
        client
            .send_json(client.request(Method::Put, "/board"), body, cancel)
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, brd_id, upload, cancel);
        Err(ApiError::Unavailable)
    }
}

/// Delete a board entry via `DELETE /board/{id}`.
///
/// # Errors
///
/// Returns status, network, and decode errors.
pub async fn delete_board(client: ApiClient, brd_id: i64, cancel: &CancelToken) -> MutationResult {
    #[cfg(feature = "hydrate")]
    {
        let request = client.request(Method::Delete, &board_endpoint(brd_id));
        client.send_json(request, RequestBody::Empty, cancel).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, brd_id, cancel);
        Err(ApiError::Unavailable)
    }
}

/// Delete one attachment via `DELETE /board/file/{bfId}`.
///
/// # Errors
///
/// Returns status, network, and decode errors.
pub async fn delete_board_file(client: ApiClient, bf_id: i64, cancel: &CancelToken) -> MutationResult {
    #[cfg(feature = "hydrate")]
    {
        let request = client.request(Method::Delete, &board_file_endpoint(bf_id));
        client.send_json(request, RequestBody::Empty, cancel).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, bf_id, cancel);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one gallery page, retrying transient failures with backoff.
///
/// # Errors
///
/// Returns the last error after [`GALLERY_RETRIES`](super::retry::GALLERY_RETRIES)
/// retries.
pub async fn fetch_gallery(
    client: ApiClient,
    query: &GalleryQuery,
    page: u32,
    cancel: &CancelToken,
) -> Result<GalleryPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = gallery_endpoint(query, page);
        super::retry::with_retry(super::retry::GALLERY_RETRIES, || {
            let request = client.request(Method::Get, &endpoint);
            async move {
                let envelope: Envelope<GalleryPage> = client.send_json(request, RequestBody::Empty, cancel).await?;
                envelope.into_content()
            }
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, query, page, cancel);
        Err(ApiError::Unavailable)
    }
}
