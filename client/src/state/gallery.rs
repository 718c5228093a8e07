//! Infinite-scroll gallery state.
//!
//! DESIGN
//! ======
//! Pages accumulate in fetch order. Changing the search text or category
//! starts a new generation; responses tagged with an older generation are
//! dropped so a slow page from the previous query never lands in the new one.
//!
//! Loaded results for recent queries are parked in a [`GalleryCache`]; going
//! back to one of them within [`STALE_AFTER_MS`] restores its pages instead
//! of starting again from page one.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::VecDeque;

use crate::net::types::{GalleryImage, GalleryPage};

/// Images requested per page.
pub const PAGE_SIZE: u32 = 8;

/// Distance from the bottom of the document that triggers the next page.
pub const LOAD_MARGIN_PX: f64 = 100.0;

/// Age after which a parked result is refetched instead of restored.
pub const STALE_AFTER_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Parked results kept at once; the oldest is evicted first.
pub const CACHED_QUERIES: usize = 5;

pub const CATEGORIES: [&str; 5] = ["all", "nature", "city", "people", "abstract"];

pub fn category_label(category: &str) -> &str {
    if category == "all" { "전체" } else { category }
}

/// Search text plus category filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryQuery {
    pub search: String,
    pub category: String,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self { search: String::new(), category: "all".to_owned() }
    }
}

impl GalleryQuery {
    /// Query string for page `page` (one-based).
    pub fn query_string(&self, page: u32) -> String {
        format!(
            "page={page}&limit={PAGE_SIZE}&search={}&category={}",
            urlencoding::encode(&self.search),
            urlencoding::encode(&self.category)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryStatus {
    Loading,
    Error,
    Success,
}

/// A page request handed out by [`GalleryState::begin_fetch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTicket {
    pub generation: u64,
    pub page: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    pub query: GalleryQuery,
    pub pages: Vec<GalleryPage>,
    pub fetching: bool,
    pub error: Option<String>,
    generation: u64,
}

impl GalleryState {
    pub fn status(&self) -> GalleryStatus {
        match (&self.error, self.pages.is_empty()) {
            (Some(_), true) => GalleryStatus::Error,
            (None, true) => GalleryStatus::Loading,
            (_, false) => GalleryStatus::Success,
        }
    }

    pub fn images(&self) -> Vec<GalleryImage> {
        self.pages.iter().flat_map(|page| page.images.iter().cloned()).collect()
    }

    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|page| page.images.len()).sum()
    }

    /// Total reported by the first page.
    pub fn total_count(&self) -> usize {
        self.pages.first().map_or(0, |page| page.total_count)
    }

    /// One-based page to request next, if any.
    pub fn next_page(&self) -> Option<u32> {
        match self.pages.last() {
            None => Some(1),
            Some(last) if last.has_next_page => last.next_page,
            Some(_) => None,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    /// Start a new query generation and drop every loaded page.
    pub fn reset(&mut self, query: GalleryQuery) {
        self.generation += 1;
        self.query = query;
        self.pages.clear();
        self.fetching = false;
        self.error = None;
    }

    /// Take over a parked result for its query. The generation still moves
    /// forward so responses addressed to the replaced query are dropped.
    pub fn restore(&mut self, parked: GalleryState) {
        let generation = self.generation + 1;
        *self = parked;
        self.generation = generation;
        self.fetching = false;
    }

    /// Claim the next page unless a fetch is in flight or the list is done.
    pub fn begin_fetch(&mut self) -> Option<PageTicket> {
        if self.fetching {
            return None;
        }
        let page = self.next_page()?;
        self.fetching = true;
        self.error = None;
        Some(PageTicket { generation: self.generation, page })
    }

    /// Record the outcome of `ticket`. Returns `false` for stale tickets.
    pub fn finish_fetch(&mut self, ticket: PageTicket, result: Result<GalleryPage, String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.fetching = false;
        match result {
            Ok(page) => self.pages.push(page),
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Whether a scroll position near the bottom should load another page.
    pub fn should_load_more(&self, near_bottom: bool) -> bool {
        near_bottom && !self.fetching && self.error.is_none() && !self.pages.is_empty() && self.has_next_page()
    }
}

#[derive(Clone, Debug)]
struct Parked {
    state: GalleryState,
    stored_at_ms: f64,
}

/// Recently viewed gallery results, newest last.
#[derive(Clone, Debug, Default)]
pub struct GalleryCache {
    entries: VecDeque<Parked>,
}

impl GalleryCache {
    /// Park `state` under its query. States without any loaded page, or
    /// that ended in an error, are not worth restoring and are skipped.
    pub fn park(&mut self, state: GalleryState, now_ms: f64) {
        if state.pages.is_empty() || state.error.is_some() {
            return;
        }
        self.entries.retain(|entry| entry.state.query != state.query);
        self.entries.push_back(Parked { state, stored_at_ms: now_ms });
        while self.entries.len() > CACHED_QUERIES {
            self.entries.pop_front();
        }
    }

    /// Remove and return the result parked for `query` if it is still fresh.
    pub fn take(&mut self, query: &GalleryQuery, now_ms: f64) -> Option<GalleryState> {
        let index = self.entries.iter().position(|entry| entry.state.query == *query)?;
        let entry = self.entries.remove(index)?;
        (now_ms - entry.stored_at_ms < STALE_AFTER_MS).then_some(entry.state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether the viewport bottom is within [`LOAD_MARGIN_PX`] of the document end.
pub fn near_bottom(scroll_y: f64, viewport_height: f64, document_height: f64) -> bool {
    scroll_y + viewport_height + LOAD_MARGIN_PX >= document_height
}
