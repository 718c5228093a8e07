//! Exponential-backoff retry for idempotent gallery reads.
//!
//! Board mutations are never retried; only the gallery query opts in.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use std::future::Future;
use std::time::Duration;

use super::error::ApiError;

/// Retries after the first failed attempt.
pub const GALLERY_RETRIES: u32 = 3;

const BASE_DELAY_MS: u64 = 1_000;
const MAX_DELAY_MS: u64 = 30_000;

/// Delay before retry number `attempt` (zero-based).
pub fn retry_delay(attempt: u32) -> Duration {
    let factor = 1_u64 << attempt.min(16);
    Duration::from_millis(BASE_DELAY_MS.saturating_mul(factor).min(MAX_DELAY_MS))
}

/// Run `op`, retrying failed attempts up to `retries` more times.
///
/// # Errors
///
/// Returns the last error once retries are exhausted. Cancellation is
/// returned immediately.
pub async fn with_retry<T, F, Fut>(retries: u32, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_cancelled() || attempt >= retries => return Err(e),
            Err(e) => {
                let delay = retry_delay(attempt);
                leptos::logging::warn!("attempt {} failed ({e}); retrying in {delay:?}", attempt + 1);
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

async fn sleep(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
