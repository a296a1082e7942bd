//! Owned, cancellable timers.

use std::future::pending;
use std::pin::Pin;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep, Sleep};

/// A one-shot deadline owned by a single state machine.
///
/// Arming replaces any pending deadline, so at most one is ever pending.
/// Cancelling drops the timer outright: once cancelled it can never fire.
#[derive(Debug, Default)]
pub struct Deadline {
    sleep: Option<Pin<Box<Sleep>>>,
}

impl Deadline {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, after: Duration) {
        self.sleep = Some(Box::pin(sleep(after)));
    }

    /// Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.sleep.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Resolves when the armed deadline passes, disarming it. Never resolves
    /// while idle. Cancel-safe: dropping the future leaves the deadline armed.
    pub async fn elapsed(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.sleep = None;
            }
            None => pending().await,
        }
    }
}

/// Aborts the wrapped task when dropped.
#[derive(Debug)]
pub struct TaskGuard(JoinHandle<()>);

impl TaskGuard {
    pub fn spawn<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        Self(tokio::spawn(future))
    }

    /// Wait for the task to finish on its own.
    pub async fn join(mut self) {
        // Joining an aborted or panicked task only tells us it is gone.
        let _ = (&mut self.0).await;
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}
