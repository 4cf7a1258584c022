//! The [`Propagator`] trait: a constraint-enforcing actor.

use crate::home::Home;
use latch_core::{ExecStatus, ModEvent, Priority};

/// An actor that prunes variable domains to enforce a constraint.
///
/// # Contract
///
/// - `propagate` MUST be deterministic: same domain state in, same
///   `ExecStatus` and domain pruning out.
/// - A propagator never frees its own memory; `__ES_SUBSUMED` tells the
///   engine to reclaim it via [`Home::reuse`] at the size the subsumed
///   variant carries, and `dispose` is used only when a space is torn
///   down with the propagator still live.
/// - `advise` is only ever called for propagators that registered at
///   least one advisor; the default panics, matching the upstream
///   kernel's unreachable default for propagators without advisors.
///
/// # Object safety
///
/// Object-safe; spaces store propagators as `Box<dyn Propagator>`.
pub trait Propagator: 'static {
    /// Human-readable name, used in error messages and test assertions.
    fn name(&self) -> &str {
        "propagator"
    }

    /// Scheduling priority: which queue `pool_put` enqueues this
    /// propagator into when one of its subscriptions fires.
    fn priority(&self) -> Priority;

    /// Run one propagation step, pruning whichever variables it
    /// depends on and reporting the resulting [`ExecStatus`].
    fn propagate(&mut self, home: &mut dyn Home) -> ExecStatus;

    /// Duplicate this propagator for a cloned space.
    ///
    /// `share` hints whether immutable data behind a shared handle
    /// should be reference-counted rather than deep-copied.
    fn copy(&self, share: bool) -> Box<dyn Propagator>;

    /// Release this propagator's own arena block, returning its size in
    /// bytes for [`Home::reuse`].
    ///
    /// Called when a space is destroyed with the propagator still
    /// registered. A propagator that reported `__ES_SUBSUMED` has
    /// already been disposed of by the engine and is never asked again.
    fn dispose(&mut self, home: &mut dyn Home) -> usize;

    /// Respond to an advisor notification with event delta `delta`.
    ///
    /// Only propagators that install advisors need override this; the
    /// default is unreachable.
    fn advise(&mut self, home: &mut dyn Home, delta: ModEvent) -> ExecStatus {
        let _ = (home, delta);
        unreachable!("{} received an advisor notification but declared none", self.name())
    }
}
