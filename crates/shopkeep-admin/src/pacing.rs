//! Request pacing: fixed-delay retry for page fetches and the inter-request
//! delays that keep the tools under the Admin API's rate limits.
//!
//! Pacing is a value the caller configures rather than constants buried in
//! the fetch loop, so each command can carry its own policy: the cleanup
//! fetch runs single-attempt (any page failure ends the fetch with a partial
//! result), the supplier pull retries each page a bounded number of times.

use std::future::Future;
use std::time::Duration;

use crate::error::AdminError;

/// Per-request retry policy with a fixed delay between attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts per request, including the first. Never zero.
    pub max_attempts: u32,
    /// Fixed sleep between consecutive attempts on the same request.
    pub retry_delay: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts,
            retry_delay,
        }
    }

    /// Policy that never retries: the first failure is terminal.
    #[must_use]
    pub const fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            retry_delay: Duration::ZERO,
        }
    }
}

/// All pacing knobs for one client.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub retry: RetryPolicy,
    /// Sleep between successful page fetches (never before the first page).
    pub inter_page_delay: Duration,
    /// Sleep after every delete request, success or failure.
    pub delete_delay: Duration,
}

impl Pacing {
    /// Zero-delay, no-retry pacing. Used by tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            retry: RetryPolicy::single_attempt(),
            inter_page_delay: Duration::ZERO,
            delete_delay: Duration::ZERO,
        }
    }
}

/// Returns `true` if `err` is a transient condition worth another attempt.
///
/// Retriable: transport failures (connect error, timeout) and non-2xx
/// statuses. Not retriable: a body that fails to decode, a bad base URL, or
/// the pagination guard tripping; another attempt cannot change those.
fn is_retriable(err: &AdminError) -> bool {
    matches!(
        err,
        AdminError::Http(_) | AdminError::UnexpectedStatus { .. }
    )
}

/// Executes `operation` under `policy`.
///
/// The attempt counter is scoped to this one call, so a later call starts
/// fresh at attempt 1; callers get the "counter resets after a success"
/// behavior by wrapping each page request in its own `retry_with_policy`.
/// Non-retriable errors are returned immediately without sleeping.
pub(crate) async fn retry_with_policy<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, AdminError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AdminError>>,
{
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= policy.max_attempts {
                    return Err(err);
                }
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = u64::try_from(policy.retry_delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "transient fetch error, retrying after fixed delay"
                );
                tokio::time::sleep(policy.retry_delay).await;
                attempt += 1;
            }
        }
    }
}
