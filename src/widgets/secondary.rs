//! Secondary content fetched once after mount.
//!
//! The slot never reports failure to its owner. A failed fetch is logged
//! and settles the slot empty.

use std::fmt::Display;
use std::future::Future;

use tokio::sync::watch;

use super::timer::TaskGuard;

#[derive(Debug, Clone, PartialEq)]
pub enum SlotState<T> {
    Loading,
    Settled(Vec<T>),
}

/// A view-state slot filled by exactly one fetch per mount.
///
/// Dropping the slot aborts a fetch still in flight.
#[derive(Debug)]
pub struct SecondarySlot<T> {
    state: watch::Receiver<SlotState<T>>,
    _task: TaskGuard,
}

impl<T> SecondarySlot<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn mount<F, E>(name: &'static str, fetch: F) -> Self
    where
        F: Future<Output = Result<Vec<T>, E>> + Send + 'static,
        E: Display,
    {
        let (state_tx, state_rx) = watch::channel(SlotState::Loading);
        let task = TaskGuard::spawn(async move {
            let records = match fetch.await {
                Ok(records) => {
                    tracing::debug!("Loaded {} {} records", records.len(), name);
                    records
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", name, e);
                    Vec::new()
                }
            };
            state_tx.send_replace(SlotState::Settled(records));
        });

        Self {
            state: state_rx,
            _task: task,
        }
    }

    pub fn state(&self) -> SlotState<T> {
        self.state.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        matches!(*self.state.borrow(), SlotState::Settled(_))
    }

    /// The records so far: empty while loading.
    pub fn records(&self) -> Vec<T> {
        match &*self.state.borrow() {
            SlotState::Loading => Vec::new(),
            SlotState::Settled(records) => records.clone(),
        }
    }

    /// Wait for the fetch to finish and return what it stored.
    pub async fn settled(&mut self) -> Vec<T> {
        match self
            .state
            .wait_for(|state| matches!(state, SlotState::Settled(_)))
            .await
        {
            Ok(state) => match &*state {
                SlotState::Settled(records) => records.clone(),
                SlotState::Loading => Vec::new(),
            },
            Err(_) => Vec::new(),
        }
    }

    pub fn unmount(self) {
        if !self.is_settled() {
            tracing::debug!("Secondary slot unmounted before its fetch settled");
        }
    }
}
