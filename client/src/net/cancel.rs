//! Per-request cancellation tied to the owning UI scope.
//!
//! A page creates one token with [`CancelToken::scoped`]; when the page
//! unmounts the token flips, and any response that lands afterwards is turned
//! into [`ApiError::Cancelled`](super::error::ApiError::Cancelled) instead of
//! updating state that no longer exists.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Token that is never cancelled by a scope.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Token cancelled when the current reactive owner is cleaned up.
    pub fn scoped() -> Self {
        let token = Self::default();
        let on_drop = token.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        token
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Pass `value` through unless the token has been cancelled meanwhile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`] once the token is cancelled.
    pub fn guard<T>(&self, value: T) -> Result<T, ApiError> {
        if self.is_cancelled() { Err(ApiError::Cancelled) } else { Ok(value) }
    }
}
