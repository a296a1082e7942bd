//! Hover-driven navigation menu.
//!
//! Pointing at a top-level entry opens its submenu at once. Leaving the entry
//! or its submenu arms a close timer; coming back to the open entry or its
//! submenu before it fires cancels it.
//!
//! ```text
//!            enter(e) / click(e)
//!   Closed ─────────────────────▶ Open(e) ◀─┐ enter(f): Open(f)
//!     ▲                             │  │    │ enter-submenu(e): cancel timer
//!     │ timer fired                 │  └────┘
//!     └──── leave(e) + CLOSE_DELAY ─┘
//! ```

use std::time::Duration;

use fyrre_core::models::{Category, MenuItem};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};

use super::timer::{Deadline, TaskGuard};

pub const CLOSE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "entry", rename_all = "snake_case")]
pub enum NavState {
    Closed,
    Open(String),
}

impl NavState {
    pub fn open_entry(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(id),
        }
    }
}

/// Pointer input, each naming the top-level entry it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    EnterEntry(String),
    LeaveEntry(String),
    EnterSubmenu(String),
    LeaveSubmenu(String),
    /// Touch or keyboard activation: toggles the entry.
    Click(String),
}

/// A top-level navigation entry and the links of its submenu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub children: Vec<NavLink>,
}

/// A submenu link. `target` is an opaque id or the backend's url; turning it
/// into a path is the router's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub target: String,
}

impl From<&Category> for NavEntry {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            label: category.name.clone(),
            children: category
                .children
                .iter()
                .map(|child| NavLink {
                    id: child.id.clone(),
                    label: child.name.clone(),
                    target: child.id.clone(),
                })
                .collect(),
        }
    }
}

impl From<&MenuItem> for NavEntry {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            label: item.label.clone(),
            children: item
                .children
                .iter()
                .map(|child| NavLink {
                    id: child.id.clone(),
                    label: child.label.clone(),
                    target: child.url.clone(),
                })
                .collect(),
        }
    }
}

// ============================================================
// State machine
// ============================================================

/// Which entry is open, plus the one close timer it owns.
#[derive(Debug)]
pub struct NavigationMachine {
    entries: Vec<NavEntry>,
    state: NavState,
    close_timer: Deadline,
    close_delay: Duration,
}

impl NavigationMachine {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self::with_close_delay(entries, CLOSE_DELAY)
    }

    pub fn with_close_delay(entries: Vec<NavEntry>, close_delay: Duration) -> Self {
        Self {
            entries,
            state: NavState::Closed,
            close_timer: Deadline::idle(),
            close_delay,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn is_close_pending(&self) -> bool {
        self.close_timer.is_armed()
    }

    /// Links to show under the open entry. `None` when closed or when the
    /// open entry has no children.
    pub fn submenu(&self) -> Option<&[NavLink]> {
        let open = self.state.open_entry()?;
        self.entries
            .iter()
            .find(|entry| entry.id == open)
            .map(|entry| entry.children.as_slice())
            .filter(|children| !children.is_empty())
    }

    /// Apply one pointer event. Returns the new state if it changed.
    ///
    /// Events for entries that were not part of the menu at mount are ignored.
    pub fn handle(&mut self, event: PointerEvent) -> Option<NavState> {
        match event {
            PointerEvent::EnterEntry(id) => {
                if !self.knows(&id) {
                    return None;
                }
                self.close_timer.cancel();
                self.transition(NavState::Open(id))
            }
            PointerEvent::LeaveEntry(id) | PointerEvent::LeaveSubmenu(id) => {
                if self.state.open_entry() == Some(id.as_str()) {
                    self.close_timer.arm(self.close_delay);
                }
                None
            }
            PointerEvent::EnterSubmenu(id) => {
                if self.state.open_entry() == Some(id.as_str()) {
                    self.close_timer.cancel();
                }
                None
            }
            PointerEvent::Click(id) => {
                if !self.knows(&id) {
                    return None;
                }
                self.close_timer.cancel();
                if self.state.open_entry() == Some(id.as_str()) {
                    self.transition(NavState::Closed)
                } else {
                    self.transition(NavState::Open(id))
                }
            }
        }
    }

    /// Resolves when the pending close timer fires and applies the close.
    /// Never resolves while no timer is pending.
    pub async fn expire(&mut self) -> Option<NavState> {
        self.close_timer.elapsed().await;
        self.transition(NavState::Closed)
    }

    /// Cancel the pending timer, if any. The state is left as is.
    pub fn unmount(&mut self) {
        self.close_timer.cancel();
    }

    /// Start the machine on its own task.
    pub fn mount(self) -> NavigationHandle {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(self.state.clone());
        let (transitions_tx, transitions_rx) = mpsc::unbounded_channel();
        let task = TaskGuard::spawn(run(self, events_rx, state_tx, transitions_tx));

        NavigationHandle {
            events: events_tx,
            state: state_rx,
            transitions: transitions_rx,
            task,
        }
    }

    fn knows(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    fn transition(&mut self, next: NavState) -> Option<NavState> {
        if self.state == next {
            return None;
        }
        self.state = next.clone();
        Some(next)
    }
}

// ============================================================
// Driver
// ============================================================

type Command = (PointerEvent, oneshot::Sender<NavState>);

async fn run(
    mut machine: NavigationMachine,
    mut events: mpsc::UnboundedReceiver<Command>,
    state: watch::Sender<NavState>,
    transitions: mpsc::UnboundedSender<NavState>,
) {
    let publish = |next: NavState| {
        tracing::trace!("Navigation menu is now {:?}", next);
        state.send_replace(next.clone());
        let _ = transitions.send(next);
    };

    loop {
        tokio::select! {
            command = events.recv() => match command {
                Some((event, ack)) => {
                    if let Some(next) = machine.handle(event) {
                        publish(next);
                    }
                    let _ = ack.send(machine.state().clone());
                }
                None => break,
            },
            Some(next) = machine.expire() => publish(next),
        }
    }

    machine.unmount();
    tracing::debug!("Navigation menu unmounted");
}

/// A mounted navigation menu.
///
/// Dropping the handle unmounts the menu and cancels its timer.
#[derive(Debug)]
pub struct NavigationHandle {
    events: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<NavState>,
    transitions: mpsc::UnboundedReceiver<NavState>,
    task: TaskGuard,
}

impl NavigationHandle {
    /// Deliver an event and wait until the menu has handled it. Returns the
    /// state right after, or `None` if the menu is gone.
    pub async fn dispatch(&self, event: PointerEvent) -> Option<NavState> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.events.send((event, ack_tx)).ok()?;
        ack_rx.await.ok()
    }

    pub fn state(&self) -> NavState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<NavState> {
        self.state.clone()
    }

    /// Every transition published since the last call, oldest first.
    pub fn take_transitions(&mut self) -> Vec<NavState> {
        let mut taken = Vec::new();
        while let Ok(next) = self.transitions.try_recv() {
            taken.push(next);
        }
        taken
    }

    /// Stop the menu and wait for its task to wind down.
    pub async fn unmount(self) {
        let Self { events, task, .. } = self;
        drop(events);
        task.join().await;
    }
}
