use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Backoff policy for calls to the content backend
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Requests sent per call, counting the first
    pub max_attempts: u32,
    /// Wait before the first resend
    pub initial_delay: Duration,
    /// Cap on any single wait
    pub max_delay: Duration,
    /// Each wait is the previous one times this
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Three requests per record, waiting 500ms then 1s.
    pub fn content_api() -> Self {
        Self::new(3, Duration::from_millis(500)).with_max_delay(Duration::from_secs(4))
    }

    /// Wait before request number `attempt` (0-indexed). The first request goes out at once.
    fn delay_before(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let delay_ms = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi((attempt - 1) as i32);

        Duration::from_millis(delay_ms as u64).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::content_api()
    }
}

/// Call `request` until it succeeds, `should_retry` rejects the error, or
/// the policy's attempts are used up. The last error is returned.
///
/// # Panics
/// Panics if `policy.max_attempts` is 0
pub async fn with_retry_if<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    label: &str,
    mut request: F,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    assert!(
        policy.max_attempts >= 1,
        "RetryPolicy.max_attempts must be >= 1, got {}",
        policy.max_attempts
    );

    let mut attempt = 0;
    loop {
        let delay = policy.delay_before(attempt);
        if !delay.is_zero() {
            debug!("{}: resending in {:?}", label, delay);
            sleep(delay).await;
        }

        let error = match request().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!("{}: recovered after {} failed requests", label, attempt);
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if !should_retry(&error) {
            debug!("{}: giving up on permanent error: {}", label, error);
            return Err(error);
        }

        attempt += 1;
        if attempt >= policy.max_attempts {
            warn!("{}: still failing after {} requests: {}", label, attempt, error);
            return Err(error);
        }

        warn!(
            "{}: request {} of {} failed: {}",
            label, attempt, policy.max_attempts, error
        );
    }
}
