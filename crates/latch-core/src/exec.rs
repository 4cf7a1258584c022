//! [`ExecStatus`]: the result of executing one propagator.

use std::fmt;

use crate::event::ModEvent;

/// Outcome of a single `Propagator::propagate` (or `Space::step`) call.
///
/// Three of these variants — [`ExecStatus::Subsumed`],
/// [`ExecStatus::FixPartial`] and [`ExecStatus::NofixPartial`] — are
/// "internal" in the sense that a hand-written propagator constructs
/// them through the helper methods below rather than naming the variant
/// directly, mirroring the double-underscore `__ES_*` convention the
/// kernel this is modeled on uses to mark them as escape hatches rather
/// than ordinary return values. [`ExecStatus::Stable`] is never returned
/// by a propagator; it is produced only by the fixpoint loop itself
/// (`Space::propagate`/`Space::step`) to report that no propagator was
/// ready to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecStatus {
    /// The propagator detected the constraint model is unsatisfiable.
    Failed,
    /// The propagator reached a fixpoint for its own constraint and
    /// wants no further events at all until a *new* subscription event
    /// arrives that is not already reflected in its current domain view.
    Fix,
    /// The propagator made progress but has not reached a fixpoint;
    /// schedule it again without narrowing which events wake it.
    NoFix,
    /// The propagator's constraint is now entailed; its memory may be
    /// reclaimed. Construct with [`ExecStatus::subsumed`].
    Subsumed {
        /// Size, in propagator-table slots, to return to the free list.
        /// Always `1` for the slot-per-propagator model this kernel uses;
        /// retained as a field because Gecode's `p.u.size` assigns it
        /// meaning and a future multi-slot propagator could use it.
        size: usize,
    },
    /// Reached a fixpoint but requests rescheduling only on the given
    /// event subset, which is retained in the propagator's PME across
    /// the processing latch. Construct with [`ExecStatus::fix_partial`].
    FixPartial(ModEvent),
    /// Like [`ExecStatus::NoFix`] but seeds the PME with a specific
    /// event subset rather than leaving it as accumulated by `process`.
    /// Construct with [`ExecStatus::nofix_partial`].
    NofixPartial(ModEvent),
    /// Returned only by the loop: no propagator was ready to run.
    Stable,
}

impl ExecStatus {
    /// Construct a [`ExecStatus::Subsumed`] for a single-slot propagator.
    pub const fn subsumed() -> Self {
        ExecStatus::Subsumed { size: 1 }
    }

    /// Construct a [`ExecStatus::FixPartial`] retaining `events`.
    pub const fn fix_partial(events: ModEvent) -> Self {
        ExecStatus::FixPartial(events)
    }

    /// Construct a [`ExecStatus::NofixPartial`] seeded with `events`.
    pub const fn nofix_partial(events: ModEvent) -> Self {
        ExecStatus::NofixPartial(events)
    }

    /// `true` for the one status that fails the owning space.
    pub const fn is_failed(&self) -> bool {
        matches!(self, ExecStatus::Failed)
    }
}

impl fmt::Display for ExecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecStatus::Failed => write!(f, "failed"),
            ExecStatus::Fix => write!(f, "fix"),
            ExecStatus::NoFix => write!(f, "nofix"),
            ExecStatus::Subsumed { size } => write!(f, "subsumed(size={size})"),
            ExecStatus::FixPartial(e) => write!(f, "fix_partial({e})"),
            ExecStatus::NofixPartial(e) => write!(f, "nofix_partial({e})"),
            ExecStatus::Stable => write!(f, "stable"),
        }
    }
}
