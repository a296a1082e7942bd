//! Stateful, timer-driven widgets.
//!
//! Each widget instance runs as one task that exclusively owns its state and
//! its timers. Events are handled one at a time in arrival order; unmounting
//! (or dropping the handle) cancels every timer the instance owns.

pub mod carousel;
pub mod navigation;
pub mod secondary;
mod timer;
pub mod tree_render;

pub use carousel::{Carousel, CarouselState, CAROUSEL_PERIOD};
pub use navigation::{
    NavEntry, NavLink, NavState, NavigationHandle, NavigationMachine, PointerEvent, CLOSE_DELAY,
};
pub use secondary::{SecondarySlot, SlotState};
pub use timer::{Deadline, TaskGuard};
