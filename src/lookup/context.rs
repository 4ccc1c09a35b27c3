//! Cancellation and deadlines for lookups

use crate::error::{KitmatchError, KitmatchResult};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Caller-supplied limits on a lookup
///
/// A timeout becomes a deadline when it is set: every step run under the
/// context shares it, so the whole lookup is bounded rather than each step.
/// Dropping the lookup future also cancels it.
#[derive(Debug, Clone, Default)]
pub struct LookupContext {
    timeout: Option<Duration>,
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

impl LookupContext {
    /// No timeout, no cancellation signal
    pub fn background() -> Self {
        Self::default()
    }

    /// Expire `timeout` from now
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Cancel once the channel's value becomes `true`
    pub fn with_cancel(mut self, cancel: watch::Receiver<bool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Create a context together with the sender that cancels it
    pub fn cancellable() -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self::default().with_cancel(rx), tx)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Run `fut` under this context's limits
    pub async fn run<T, F>(&self, fut: F) -> KitmatchResult<T>
    where
        F: Future<Output = KitmatchResult<T>>,
    {
        let guarded = async {
            tokio::select! {
                result = fut => result,
                () = Self::cancelled(self.cancel.clone()) => Err(KitmatchError::Cancelled),
            }
        };

        match (self.deadline, self.timeout) {
            (Some(deadline), Some(timeout)) => {
                // A step started after the deadline fails without being polled
                if Instant::now() >= deadline {
                    return Err(KitmatchError::LookupTimeout(timeout));
                }
                tokio::time::timeout_at(deadline, guarded)
                    .await
                    .map_err(|_| KitmatchError::LookupTimeout(timeout))?
            }
            _ => guarded.await,
        }
    }

    /// Resolves once cancellation is signalled; never if it cannot be
    async fn cancelled(cancel: Option<watch::Receiver<bool>>) {
        if let Some(mut rx) = cancel {
            if rx.wait_for(|cancelled| *cancelled).await.is_ok() {
                return;
            }
        }
        std::future::pending::<()>().await;
    }
}
