//! Timer helpers: sleep, retry-with-delay and poll-until.
//!
//! Each call owns its timer and closure state; nothing is shared between
//! concurrent callers. Dropping the returned future cancels the wait.

use std::{fmt, future::Future, time::Duration};

use tokio::time::Instant;

mod errors;

pub use errors::TimingError;

/// Waits for `duration`.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// How [`retry`] spaces out its attempts.
///
/// ```
/// # use shapekit::timing::RetryPolicy;
/// # use std::time::Duration;
/// let policy = RetryPolicy::new(5)
///     .with_delay(Duration::from_millis(50))
///     .with_backoff(2.0);
/// assert_eq!(policy.delay_before(1), Duration::ZERO);
/// assert_eq!(policy.delay_before(2), Duration::from_millis(50));
/// assert_eq!(policy.delay_before(4), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub attempts: u32,
    /// Wait after the first failure
    pub delay: Duration,
    /// Factor applied to the wait after each further failure
    pub backoff: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(100),
            backoff: 1.0,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with `attempts` attempts and the default delay.
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_backoff(mut self, backoff: f64) -> Self {
        self.backoff = backoff;
        self
    }

    /// Wait before attempt number `attempt` (1-based; the first attempt
    /// does not wait).
    ///
    /// Waits too long to represent saturate at [`Duration::MAX`].
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= 1 || self.delay.is_zero() {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(attempt - 2).unwrap_or(i32::MAX);
        let secs = self.delay.as_secs_f64() * self.backoff.max(0.0).powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// Runs `operation` until it succeeds or the policy runs out of attempts.
///
/// `operation` receives the 1-based attempt number. A policy with zero
/// attempts still runs the operation once.
///
/// # Errors
/// Returns [`TimingError::Exhausted`] carrying the last error's message
/// when every attempt fails.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, TimingError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= attempts => {
                tracing::warn!(attempt, error = %err, "Final attempt failed");
                return Err(TimingError::Exhausted {
                    attempts,
                    last_error: err.to_string(),
                });
            }
            Err(err) => {
                attempt += 1;
                let wait = policy.delay_before(attempt);
                tracing::warn!(
                    attempt,
                    error = %err,
                    wait_ms = wait.as_millis() as u64,
                    "Attempt failed; retrying"
                );
                sleep(wait).await;
            }
        }
    }
}

/// Checks `condition` every `interval` until it holds or `timeout` passes.
///
/// The condition is checked once immediately.
///
/// # Errors
/// Returns [`TimingError::Timeout`] if the condition still does not hold
/// once `timeout` has elapsed.
pub async fn poll_until<F>(
    mut condition: F,
    interval: Duration,
    timeout: Duration,
) -> Result<(), TimingError>
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    loop {
        if condition() {
            return Ok(());
        }
        let waited = start.elapsed();
        if waited >= timeout {
            tracing::debug!(waited_ms = waited.as_millis() as u64, "Polling timed out");
            return Err(TimingError::Timeout { waited });
        }
        sleep(interval.min(timeout - waited)).await;
    }
}
