//! Backoff schedule and the sleep abstraction that keeps it testable.
//!
//! The retry loop in [`crate::gemini`] is an explicit bounded state
//! machine (attempt counter, no recursion); injecting [`Sleeper`] lets
//! tests assert backoff timing without waiting on a real clock.

use std::time::Duration;

/// Async sleep, injectable for tests.
#[async_trait::async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait::async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Delay before retry number `n` (zero-based): 1s, 2s, 4s, ...
pub fn backoff_delay(retry: u32) -> Duration {
    Duration::from_secs(1u64 << retry.min(16))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_double_from_one_second() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn delay_growth_is_bounded() {
        // Attempt counts are small in practice; the shift is clamped
        // so a misconfigured max_attempts cannot overflow.
        assert_eq!(backoff_delay(64), Duration::from_secs(1 << 16));
    }
}
