//! The abstract variable contract consumed by the propagation engine.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dep::DepList;
use latch_core::{ModEvent, VarId};

/// Contract a concrete variable domain (integer, Boolean, set — all
/// external to this crate) must implement to participate in a space's
/// propagation loop and cloning machinery.
///
/// A dependency list, a PME accumulator, and a `fwd` slot used only
/// during `clone`. Unlike Gecode's intrusive `next` pointer threading a
/// variable into its per-kind list, ownership/iteration order here is
/// the responsibility of whatever `Vec<Box<dyn VariableImp>>` (or typed
/// per-kind table) a space implementation stores it in.
pub trait VariableImp: 'static {
    /// This variable's identity within its owning space.
    fn id(&self) -> VarId;

    /// Shared view of the subscriber list.
    fn dependencies(&self) -> &DepList;

    /// Mutable view of the subscriber list, for `subscribe`/`cancel`.
    fn dependencies_mut(&mut self) -> &mut DepList;

    /// Events accumulated since the last drain, without consuming them.
    fn pme(&self) -> ModEvent;

    /// OR `events` into the pending accumulator.
    ///
    /// Called whenever the variable's own domain changes; the engine's
    /// `process()` step later drains this into each subscriber's PME.
    fn accumulate(&mut self, events: ModEvent);

    /// Drain and return the accumulated events, resetting to
    /// [`ModEvent::NONE`].
    fn take_pme(&mut self) -> ModEvent;

    /// Forwarding target used only during the two-stage clone. `None`
    /// outside of an in-progress clone.
    fn fwd(&self) -> Option<VarId>;

    /// Set the forwarding target during clone stage one.
    fn set_fwd(&mut self, target: Option<VarId>);

    /// Clear the forwarding target; called for every variable at the end
    /// of clone stage two regardless of whether it was ever set.
    fn clear_fwd(&mut self) {
        self.set_fwd(None);
    }

    /// Duplicate this variable (domain and all) for a cloned space.
    ///
    /// `share` hints whether immutable data behind a shared handle
    /// should be reference-counted rather than deep-copied, mirroring
    /// the `share` flag threaded through `Propagator::copy` and
    /// `Branching::copy`.
    ///
    /// Returns a freshly allocated `Rc<RefCell<..>>` rather than a
    /// `Box`: a space stores its variables behind `Rc<RefCell<dyn
    /// VariableImp>>` so propagators can hold the same handle typed
    /// concretely, and that unsizing coercion only works from a sized
    /// `RefCell<Self>` — it cannot be recovered from an already
    /// type-erased `Box<dyn VariableImp>`. Implementors should read
    /// this as `Rc::new(RefCell::new(self.clone()))`.
    fn copy(&self, share: bool) -> Rc<RefCell<dyn VariableImp>>;
}

/// A minimal reusable base a concrete variable can embed for the
/// bookkeeping fields the contract requires, leaving only the domain
/// representation itself (bounds, value set, ...) to the embedder.
#[derive(Clone, Debug)]
pub struct VarBase {
    id: VarId,
    deps: DepList,
    pme: ModEvent,
    fwd: Option<VarId>,
}

impl VarBase {
    /// Construct a fresh base for a variable about to be registered at `id`.
    pub fn new(id: VarId) -> Self {
        Self {
            id,
            deps: DepList::new(),
            pme: ModEvent::NONE,
            fwd: None,
        }
    }

    /// This variable's id.
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Shared view of the subscriber list.
    pub fn dependencies(&self) -> &DepList {
        &self.deps
    }

    /// Mutable view of the subscriber list.
    pub fn dependencies_mut(&mut self) -> &mut DepList {
        &mut self.deps
    }

    /// Current accumulator value.
    pub fn pme(&self) -> ModEvent {
        self.pme
    }

    /// OR `events` into the accumulator.
    pub fn accumulate(&mut self, events: ModEvent) {
        self.pme |= events;
    }

    /// Drain the accumulator.
    pub fn take_pme(&mut self) -> ModEvent {
        std::mem::replace(&mut self.pme, ModEvent::NONE)
    }

    /// Current forwarding target.
    pub fn fwd(&self) -> Option<VarId> {
        self.fwd
    }

    /// Set the forwarding target.
    pub fn set_fwd(&mut self, target: Option<VarId>) {
        self.fwd = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latch_core::{Priority, PropagatorId};

    #[test]
    fn accumulate_then_take_resets_to_none() {
        let mut base = VarBase::new(VarId(0));
        base.accumulate(ModEvent(0b101));
        assert_eq!(base.pme(), ModEvent(0b101));
        assert_eq!(base.take_pme(), ModEvent(0b101));
        assert_eq!(base.pme(), ModEvent::NONE);
    }

    #[test]
    fn accumulate_is_additive_until_drained() {
        let mut base = VarBase::new(VarId(0));
        base.accumulate(ModEvent(0b001));
        base.accumulate(ModEvent(0b100));
        assert_eq!(base.pme(), ModEvent(0b101));
    }

    #[test]
    fn fwd_defaults_to_none_and_round_trips() {
        let mut base = VarBase::new(VarId(0));
        assert_eq!(base.fwd(), None);
        base.set_fwd(Some(VarId(3)));
        assert_eq!(base.fwd(), Some(VarId(3)));
    }

    #[test]
    fn dependencies_mut_allows_subscription() {
        let mut base = VarBase::new(VarId(0));
        base.dependencies_mut()
            .subscribe(PropagatorId(1), Priority::new(0), ModEvent(0b1));
        assert_eq!(base.dependencies().len(), 1);
    }
}
