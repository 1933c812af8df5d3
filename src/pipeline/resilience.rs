// ABOUTME: Bounded dependency calls with a per-attempt timeout and retry-once backoff
// ABOUTME: Maps exhausted attempts to DependencyUnavailable and never retries validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use crate::config::DependencyConfig;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{error, warn};

/// Configuration for dependency call retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Timeout for each attempt
    pub timeout: Duration,
    /// Delay before the next attempt
    pub backoff: Duration,
    /// Total attempts including the first
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(defaults::DEPENDENCY_TIMEOUT_MS),
            backoff: Duration::from_millis(defaults::DEPENDENCY_RETRY_BACKOFF_MS),
            max_attempts: defaults::DEPENDENCY_MAX_ATTEMPTS,
        }
    }
}

impl RetryPolicy {
    /// Policy from service configuration
    #[must_use]
    pub fn from_config(config: &DependencyConfig) -> Self {
        Self {
            timeout: config.timeout(),
            backoff: config.retry_backoff(),
            max_attempts: defaults::DEPENDENCY_MAX_ATTEMPTS,
        }
    }
}

/// Run one dependency call under the policy
///
/// Each attempt is bounded by `policy.timeout`. Validation errors return
/// immediately. When every attempt fails, the last error is surfaced as
/// `DependencyUnavailable` tagged with `dependency`.
///
/// # Errors
///
/// Returns the validation error unchanged, or a dependency error after the
/// last attempt
pub async fn call_with_retry<F, Fut, T>(
    dependency: &str,
    policy: &RetryPolicy,
    mut f: F,
) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let timeout_ms = u64::try_from(policy.timeout.as_millis()).unwrap_or(u64::MAX);
    let mut attempt = 0;

    loop {
        attempt += 1;
        let result = match timeout(policy.timeout, f()).await {
            Ok(result) => result,
            Err(_) => Err(AppError::dependency_timeout(dependency, timeout_ms)),
        };

        let e = match result {
            Ok(value) => return Ok(value),
            Err(e) if e.is_validation() => return Err(e),
            Err(e) => e,
        };

        if attempt >= max_attempts {
            error!(
                dependency,
                attempts = attempt,
                error = %e,
                "Dependency call failed after retries"
            );
            return Err(if e.is_dependency_unavailable() {
                e
            } else {
                AppError::dependency_unavailable(dependency, e.message.clone()).with_source(e)
            });
        }

        warn!(
            dependency,
            attempt,
            max_attempts,
            backoff_ms = u64::try_from(policy.backoff.as_millis()).unwrap_or(u64::MAX),
            error = %e,
            "Dependency call failed, retrying after backoff"
        );
        sleep(policy.backoff).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            timeout: Duration::from_millis(50),
            backoff: Duration::from_millis(1),
            max_attempts: 2,
        }
    }

    #[tokio::test]
    async fn test_retries_once_then_succeeds() {
        let calls = AtomicU32::new(0);
        let value = call_with_retry("drill_library", &fast_policy(), || async {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AppError::database("locked"))
            } else {
                Ok(7)
            }
        })
        .await
        .unwrap();
        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_validation_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let err = call_with_retry("program_repository", &fast_policy(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(AppError::invalid_input("bad"))
        })
        .await
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhausted_attempts_become_dependency_unavailable() {
        let calls = AtomicU32::new(0);
        let err = call_with_retry("program_repository", &fast_policy(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(AppError::database("disk I/O error"))
        })
        .await
        .unwrap_err();
        assert!(err.is_dependency_unavailable());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failure() {
        let err = call_with_retry("drill_library", &fast_policy(), || async {
            sleep(Duration::from_millis(200)).await;
            Ok::<_, AppError>(())
        })
        .await
        .unwrap_err();
        assert!(err.is_dependency_unavailable());
        assert!(err.message.contains("drill_library"));
    }
}
