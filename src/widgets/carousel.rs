//! Auto-rotating carousel.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::timer::TaskGuard;

pub const CAROUSEL_PERIOD: Duration = Duration::from_millis(3000);

/// A bounded index over a list whose length is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// `None` for an empty list.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

/// A mounted carousel. Dropping it stops the rotation.
#[derive(Debug)]
pub struct Carousel<T> {
    slides: Vec<T>,
    index: watch::Receiver<usize>,
    _task: TaskGuard,
}

impl<T> Carousel<T> {
    pub fn mount(slides: Vec<T>) -> Option<Self> {
        Self::mount_with_period(slides, CAROUSEL_PERIOD)
    }

    /// Start rotating. The first advance happens one full `period` after
    /// mount. An empty list starts nothing and returns `None`.
    pub fn mount_with_period(slides: Vec<T>, period: Duration) -> Option<Self> {
        let state = CarouselState::new(slides.len())?;
        let (index_tx, index_rx) = watch::channel(state.index());
        let task = TaskGuard::spawn(rotate(state, period, index_tx));
        tracing::debug!("Carousel mounted with {} slides", state.len());

        Some(Self {
            slides,
            index: index_rx,
            _task: task,
        })
    }

    pub fn index(&self) -> usize {
        *self.index.borrow()
    }

    pub fn current(&self) -> &T {
        // The index is always below slides.len(), which is non-zero.
        &self.slides[self.index()]
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    /// Stop rotating. Subscribers see the channel close.
    pub fn unmount(self) {
        tracing::debug!("Carousel unmounted at slide {}", self.index());
    }
}

async fn rotate(mut state: CarouselState, period: Duration, index: watch::Sender<usize>) {
    let mut ticks = interval_at(Instant::now() + period, period);
    // A stalled runtime must not replay the missed advances in one burst.
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticks.tick().await;
        index.send_replace(state.advance());
    }
}
