//! The async boundary standing in for network latency.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller for a simulated network round-trip.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Resolves immediately after yielding once to the scheduler.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantDelay;

#[async_trait]
impl Delay for InstantDelay {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_delay_waits_for_virtual_time() {
        let start = tokio::time::Instant::now();
        TokioDelay.sleep(Duration::from_millis(600)).await;
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn instant_delay_does_not_advance_time() {
        let start = tokio::time::Instant::now();
        InstantDelay.sleep(Duration::from_secs(60)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
