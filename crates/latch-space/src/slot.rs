//! Per-propagator bookkeeping owned by the space, not by the propagator
//! itself — the Rust analogue of Gecode's scratch union field `u`.

use latch_core::{ModEvent, Priority};
use latch_propagator::Propagator;

/// A propagator together with the state the engine needs to schedule
/// and latch it, kept separate from the propagator's own data so the
/// fixpoint loop can read/write `pme` without touching the trait
/// object.
pub struct PropagatorSlot {
    pub(crate) propagator: Box<dyn Propagator>,
    pub(crate) pme: ModEvent,
    pub(crate) priority: Priority,
    pub(crate) queued: bool,
}

impl PropagatorSlot {
    /// Wrap a freshly posted propagator, scheduled for an initial run.
    pub(crate) fn new(propagator: Box<dyn Propagator>) -> Self {
        let priority = propagator.priority();
        Self {
            propagator,
            pme: ModEvent::NONE,
            priority,
            queued: true,
        }
    }

    /// The propagator's declared scheduling priority.
    pub(crate) fn priority(&self) -> Priority {
        self.priority
    }
}
