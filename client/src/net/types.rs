//! Wire DTOs for the board backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Every response is wrapped
//! in a `resultCode`/`content` envelope; the list endpoint names the payload
//! `response` instead, so the envelope accepts both keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::state::session::Role;

/// Result code the backend uses for success.
pub const RESULT_OK: i64 = 200;

/// `resultCode`/`content` envelope returned by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default = "default_result_code")]
    pub result_code: i64,
    #[serde(alias = "response")]
    pub content: Option<T>,
}

fn default_result_code() -> i64 {
    RESULT_OK
}

impl<T> Envelope<T> {
    pub fn is_ok(&self) -> bool {
        self.result_code == RESULT_OK
    }

    /// Unwrap the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `resultCode` is not 200 and
    /// [`ApiError::Decode`] when a successful envelope has no payload.
    pub fn into_content(self) -> Result<T, ApiError> {
        if !self.is_ok() {
            return Err(ApiError::Rejected { code: self.result_code });
        }
        self.content
            .ok_or_else(|| ApiError::Decode("missing content".to_owned()))
    }
}

/// Session payload returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginContent {
    pub token: String,
    pub user_name: String,
    pub role: Role,
}

/// One page of the board list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardPage {
    /// Zero-based page index.
    #[serde(default)]
    pub page: usize,
    /// Total number of entries across all pages.
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub content: Vec<BoardSummary>,
}

/// A board row in the list view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub brd_id: i64,
    pub title: String,
    pub writer: String,
    #[serde(default)]
    pub read_count: i64,
    #[serde(default)]
    pub create_date: String,
}

/// A single board entry with its attachments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetail {
    pub brd_id: i64,
    pub title: String,
    pub contents: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub read_count: i64,
    #[serde(default)]
    pub file_list: Vec<BoardFile>,
}

impl BoardDetail {
    pub fn has_files(&self) -> bool {
        !self.file_list.is_empty()
    }
}

/// Attachment metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardFile {
    pub bf_id: i64,
    pub file_name: String,
}

/// One page of gallery images.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    pub next_page: Option<u32>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub total_count: usize,
}

/// Gallery card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
}
