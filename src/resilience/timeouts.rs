//! Timeout enforcement.
//!
//! # Responsibilities
//! - Run the network call on a background task
//! - Race its result against an absolute deadline
//! - Drive the progress animation while waiting
//! - Cancel the in-flight call when the deadline wins
//!
//! # Design Decisions
//! - Uses Tokio's timer and a oneshot channel; the task's single send never
//!   blocks, even after the caller has gone
//! - Biased select: deadline, then result, then progress tick
//! - Timeout errors are distinct from transport errors

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::http::types::{FetchError, FetchResult};
use crate::progress::{LoadingFrames, ProgressReporter};

/// Absolute point in time after which a fetch reports a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
            budget,
        }
    }

    pub fn instant(&self) -> Instant {
        self.at
    }

    /// The duration this deadline was created with.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn is_elapsed(&self) -> bool {
        Instant::now() >= self.at
    }
}

/// Run `work` in the background and wait for it until `deadline`.
///
/// Returns the work's own result if it arrives first. If the deadline
/// elapses first, `cancel` is triggered and [`FetchError::Timeout`] is
/// returned; the late result, if any, is dropped.
pub async fn race_deadline<T, F>(
    work: F,
    deadline: Deadline,
    poll_interval: Duration,
    cancel: &CancellationToken,
    progress: &mut dyn ProgressReporter,
) -> FetchResult<T>
where
    F: Future<Output = FetchResult<T>> + Send + 'static,
    T: Send + 'static,
{
    let (tx, mut rx) = oneshot::channel();

    tokio::spawn(async move {
        let outcome = work.await;
        // Receiver is gone after a timeout; the result is simply discarded.
        let _ = tx.send(outcome);
    });

    let expiry = time::sleep_until(deadline.instant());
    tokio::pin!(expiry);

    let mut ticker = time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut frames = LoadingFrames::new();

    let outcome = loop {
        tokio::select! {
            biased;
            _ = &mut expiry => {
                cancel.cancel();
                tracing::debug!(
                    timeout_ms = deadline.budget().as_millis() as u64,
                    "Deadline elapsed before a result arrived"
                );
                break Err(FetchError::Timeout {
                    after_ms: deadline.budget().as_millis() as u64,
                });
            }
            received = &mut rx => {
                break received.unwrap_or_else(|_| {
                    Err(FetchError::Task("background fetch ended without a result".to_string()))
                });
            }
            _ = ticker.tick() => {
                progress.frame(frames.next_frame());
            }
        }
    };

    progress.finish();
    outcome
}
