//! Artificial wait inserted before an analysis is returned.
//!
//! The demo page pauses so the analysis "feels" like a network call. The wait
//! is injected so tests can skip it and callers can cancel it.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::types::Cancelled;

/// Default pause before an analysis is delivered.
pub const DEFAULT_LATENCY_MS: u64 = 2000;

pub trait Latency {
    /// Resolve once the wait is over, or with `Cancelled` if it was cut short.
    fn wait(&self) -> impl Future<Output = Result<(), Cancelled>> + Send;
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    async fn wait(&self) -> Result<(), Cancelled> {
        Ok(())
    }
}

/// Sleeps for a fixed duration unless the token is cancelled first.
#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    delay: Duration,
    token: CancellationToken,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            token: CancellationToken::new(),
        }
    }

    pub fn with_token(delay: Duration, token: CancellationToken) -> Self {
        Self { delay, token }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle that cancels every pending and future wait on this latency.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LATENCY_MS))
    }
}

impl Latency for SimulatedLatency {
    async fn wait(&self) -> Result<(), Cancelled> {
        if self.delay.is_zero() {
            return if self.token.is_cancelled() {
                Err(Cancelled)
            } else {
                Ok(())
            };
        }

        tokio::select! {
            _ = self.token.cancelled() => {
                tracing::debug!("Simulated latency cancelled");
                Err(Cancelled)
            }
            _ = tokio::time::sleep(self.delay) => Ok(()),
        }
    }
}
