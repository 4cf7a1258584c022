//! A variable's dependency list: which propagators to wake, and on which
//! events, when the variable changes.

use latch_core::{ModEvent, Priority, PropagatorId};
use smallvec::SmallVec;

/// One entry in a variable's dependency list.
///
/// Records which propagator subscribed, the priority queue it is
/// scheduled into, and the subset of events it asked to be woken on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    /// The subscribed propagator.
    pub propagator: PropagatorId,
    /// Priority the propagator is scheduled at.
    pub priority: Priority,
    /// Events of interest — the variable ORs only these bits into the
    /// propagator's PME.
    pub interest: ModEvent,
}

/// A variable's subscriber list.
///
/// Most variables have only a handful of dependent propagators, so this
/// is backed by a [`SmallVec`] rather than a heap-allocated `Vec` in the
/// common case.
///
/// Entries are never removed eagerly once a variable becomes assigned:
/// a subscriber may thus appear as an obsolete entry for a propagator
/// that has since been subsumed, and is expected to handle that lazily
/// (see `Space::process`'s guarded `Option` lookup); [`DepList::cancel`]
/// is for the ordinary unsubscribe path used while a variable is still
/// unassigned.
#[derive(Clone, Debug, Default)]
pub struct DepList {
    entries: SmallVec<[Subscription; 4]>,
}

impl DepList {
    /// An empty dependency list.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Register `prop` as interested in `interest` events at `priority`.
    ///
    /// Appending on every call (no dedup) matches the upstream kernel:
    /// the same propagator may subscribe more than once with different
    /// interest masks, e.g. once per argument position in a constraint.
    pub fn subscribe(&mut self, prop: PropagatorId, priority: Priority, interest: ModEvent) {
        self.entries.push(Subscription {
            propagator: prop,
            priority,
            interest,
        });
    }

    /// Remove every subscription entry belonging to `prop` at `priority`.
    ///
    /// Matches on both fields because a propagator may hold independent
    /// subscriptions to the same variable at different priorities.
    pub fn cancel(&mut self, prop: PropagatorId, priority: Priority) {
        self.entries
            .retain(|s| !(s.propagator == prop && s.priority == priority));
    }

    /// Iterate over all subscriptions, including any stale entries left
    /// by an assigned variable.
    pub fn iter(&self) -> impl Iterator<Item = &Subscription> {
        self.entries.iter()
    }

    /// Number of subscription entries, including stale ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no subscriptions at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(n: u32) -> PropagatorId {
        PropagatorId(n)
    }

    #[test]
    fn subscribe_then_cancel_removes_matching_entries() {
        let mut deps = DepList::new();
        deps.subscribe(sub(1), Priority::new(2), ModEvent(0b1));
        deps.subscribe(sub(2), Priority::new(2), ModEvent(0b1));
        deps.cancel(sub(1), Priority::new(2));
        assert_eq!(deps.len(), 1);
        assert_eq!(deps.iter().next().unwrap().propagator, sub(2));
    }

    #[test]
    fn duplicate_subscriptions_are_not_deduplicated() {
        let mut deps = DepList::new();
        deps.subscribe(sub(1), Priority::new(0), ModEvent(0b01));
        deps.subscribe(sub(1), Priority::new(0), ModEvent(0b10));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn cancel_respects_priority() {
        let mut deps = DepList::new();
        deps.subscribe(sub(1), Priority::new(0), ModEvent(0b1));
        deps.subscribe(sub(1), Priority::new(1), ModEvent(0b1));
        deps.cancel(sub(1), Priority::new(0));
        assert_eq!(deps.len(), 1);
        assert_eq!(deps.iter().next().unwrap().priority, Priority::new(1));
    }

    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Subscribe(u32, u8, u32),
        Cancel(u32, u8),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..4, 0u8..3, 0u32..8).prop_map(|(p, pr, ev)| Op::Subscribe(p, pr, ev)),
            (0u32..4, 0u8..3).prop_map(|(p, pr)| Op::Cancel(p, pr)),
        ]
    }

    proptest! {
        /// `len()` after replaying a random op sequence matches a plain
        /// `Vec`-based reference model of the same subscribe/cancel rules.
        #[test]
        fn len_matches_reference_model(ops in prop::collection::vec(arb_op(), 0..64)) {
            let mut deps = DepList::new();
            let mut model: Vec<(u32, u8)> = Vec::new();
            for op in ops {
                match op {
                    Op::Subscribe(p, pr, ev) => {
                        deps.subscribe(sub(p), Priority::new(pr), ModEvent(ev));
                        model.push((p, pr));
                    }
                    Op::Cancel(p, pr) => {
                        deps.cancel(sub(p), Priority::new(pr));
                        model.retain(|&(mp, mpr)| !(mp == p && mpr == pr));
                    }
                }
            }
            prop_assert_eq!(deps.len(), model.len());
        }

        /// Cancelling every distinct `(propagator, priority)` pair ever
        /// subscribed always empties the list.
        #[test]
        fn cancel_all_subscribed_pairs_empties_list(
            pairs in prop::collection::vec((0u32..4, 0u8..3, 0u32..8), 0..32)
        ) {
            let mut deps = DepList::new();
            for &(p, pr, ev) in &pairs {
                deps.subscribe(sub(p), Priority::new(pr), ModEvent(ev));
            }
            for &(p, pr, _) in &pairs {
                deps.cancel(sub(p), Priority::new(pr));
            }
            prop_assert!(deps.is_empty());
        }
    }
}
