//! Retry wrapper for the text enhancement port.

use std::thread;
use std::time::Duration;

use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::{PolishedPrompt, TextEnhancer};

const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &GeminiApiConfig) -> Self {
        Self {
            max_attempts: config.max_retries.max(1),
            base_delay_ms: config.retry_delay_ms.max(1),
            max_delay_ms: DEFAULT_MAX_DELAY_MS.max(config.retry_delay_ms),
        }
    }

    #[cfg(test)]
    fn immediate(max_attempts: u32) -> Self {
        Self { max_attempts, base_delay_ms: 1, max_delay_ms: 1 }
    }

    // attempt=1 -> base, attempt=2 -> base*2, attempt=3 -> base*4, capped.
    fn delay_for_retry(&self, failed_attempt: u32) -> Duration {
        let exponent = failed_attempt.saturating_sub(1).min(6);
        let multiplier = 1_u64 << exponent;
        Duration::from_millis(self.base_delay_ms.saturating_mul(multiplier).min(self.max_delay_ms))
    }
}

/// Decorator retrying transient enhancement failures.
pub struct RetryingTextEnhancer {
    inner: Box<dyn TextEnhancer>,
    policy: RetryPolicy,
}

impl RetryingTextEnhancer {
    pub fn new(inner: Box<dyn TextEnhancer>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    fn run<T>(
        &self,
        operation: &str,
        call: impl Fn(&dyn TextEnhancer) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut last_error: Option<AppError> = None;

        for attempt in 1..=self.policy.max_attempts {
            match call(self.inner.as_ref()) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    let last_attempt = attempt == self.policy.max_attempts;
                    if !is_retryable_error(&error) || last_attempt {
                        return Err(error);
                    }

                    let delay = self.policy.delay_for_retry(attempt);
                    eprintln!(
                        "Gemini {} failed (attempt {}/{}): {}. Retrying in {} ms.",
                        operation,
                        attempt,
                        self.policy.max_attempts,
                        error,
                        delay.as_millis()
                    );
                    last_error = Some(error);
                    thread::sleep(delay);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::EnhancerApi {
            message: format!("Gemini {operation} failed after retries"),
            status: None,
        }))
    }
}

impl TextEnhancer for RetryingTextEnhancer {
    fn enrich(&self, idea: &str) -> Result<String, AppError> {
        self.run("enrich", |inner| inner.enrich(idea))
    }

    fn polish(&self, body: &str) -> Result<PolishedPrompt, AppError> {
        self.run("polish", |inner| inner.polish(body))
    }
}

/// Transport failures, rate limiting, and server errors are worth retrying;
/// anything the caller can influence (4xx) is not.
fn is_retryable_error(error: &AppError) -> bool {
    match error {
        AppError::EnhancerApi { status: None, .. } => true,
        AppError::EnhancerApi { status: Some(status), .. } => {
            *status == 429 || *status >= 500
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FlakyEnhancer {
        failures_before_success: Cell<u32>,
        status: Option<u16>,
    }

    impl TextEnhancer for FlakyEnhancer {
        fn enrich(&self, idea: &str) -> Result<String, AppError> {
            let remaining = self.failures_before_success.get();
            if remaining > 0 {
                self.failures_before_success.set(remaining - 1);
                return Err(AppError::EnhancerApi {
                    message: "boom".into(),
                    status: self.status,
                });
            }
            Ok(format!("enriched {idea}"))
        }

        fn polish(&self, body: &str) -> Result<PolishedPrompt, AppError> {
            Ok(PolishedPrompt { primary: body.into(), secondary: body.into() })
        }
    }

    #[test]
    fn transient_failures_are_retried_to_success() {
        let inner = FlakyEnhancer { failures_before_success: Cell::new(2), status: Some(503) };
        let retrying = RetryingTextEnhancer::new(Box::new(inner), RetryPolicy::immediate(3));
        assert_eq!(retrying.enrich("a cat").unwrap(), "enriched a cat");
    }

    #[test]
    fn client_errors_are_not_retried() {
        let inner = FlakyEnhancer { failures_before_success: Cell::new(2), status: Some(400) };
        let retrying = RetryingTextEnhancer::new(Box::new(inner), RetryPolicy::immediate(3));
        assert!(retrying.enrich("a cat").is_err());
    }

    #[test]
    fn attempts_are_bounded() {
        let inner = FlakyEnhancer { failures_before_success: Cell::new(10), status: None };
        let retrying = RetryingTextEnhancer::new(Box::new(inner), RetryPolicy::immediate(2));
        assert!(retrying.enrich("a cat").is_err());
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy { max_attempts: 5, base_delay_ms: 100, max_delay_ms: 300 };
        assert_eq!(policy.delay_for_retry(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for_retry(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for_retry(3), Duration::from_millis(300));
    }
}
