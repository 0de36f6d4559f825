//! Retry policy for supplier fetches.
//!
//! Transient HTTP failures (429 and network errors) are retried with
//! exponential backoff. Anything that would fail the same way again
//! (404, bad status, a body that is not JSON) is returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::SupplierError;

/// Returns `true` if `err` is a transient condition worth another attempt.
fn is_retriable(err: &SupplierError) -> bool {
    matches!(
        err,
        SupplierError::RateLimited { .. } | SupplierError::Http(_)
    )
}

/// Executes `operation`, retrying transient errors with exponential backoff.
///
/// The wait before retry `n` (1-based) is `backoff_base_secs * 2^(n-1)`
/// seconds. With `max_retries = 2` the operation runs at most 3 times; the
/// last error is returned once retries are exhausted.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, SupplierError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SupplierError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient supplier error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
