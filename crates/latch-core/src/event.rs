//! Pending modification events (PME) and the priority classes propagators
//! are scheduled under.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, BitXorAssign};

/// A bitmask of pending modification events.
///
/// Two distinct things in the kernel are modeled with `ModEvent`:
///
/// - a **variable's own delta**: which of its own modification events
///   (e.g. "bound changed", "became assigned") are pending since the
///   last time `Space::process` drained it;
/// - a **propagator's PME** (`u.pme` in spec terms): the union of event
///   bits forwarded to it by every variable it depends on, used by the
///   fixpoint loop's xor-mask latch (see `latch-space::space::propagate`).
///
/// The concrete meaning of individual bits is owned by variable
/// implementations outside this crate; the kernel only needs bitwise
/// union, intersection and the [`ModEvent::ASSIGNED`] sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ModEvent(pub u32);

impl ModEvent {
    /// No pending events.
    pub const NONE: ModEvent = ModEvent(0);

    /// Sentinel meaning "every event bit considered set".
    ///
    /// Used to latch a propagator's PME after an `ES_FIX`/`__ES_FIX_PARTIAL`
    /// return so that `process()` cannot usefully add anything new to it
    /// before the xor-mask in the next loop iteration retires exactly the
    /// bits that were latched.
    pub const ASSIGNED: ModEvent = ModEvent(u32::MAX);

    /// Returns `true` if no bits are set.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if any bit overlaps with `interest`.
    pub fn intersects(self, interest: ModEvent) -> bool {
        (self.0 & interest.0) != 0
    }
}

impl BitOr for ModEvent {
    type Output = ModEvent;
    fn bitor(self, rhs: Self) -> Self {
        ModEvent(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModEvent {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ModEvent {
    type Output = ModEvent;
    fn bitand(self, rhs: Self) -> Self {
        ModEvent(self.0 & rhs.0)
    }
}

impl BitXor for ModEvent {
    type Output = ModEvent;
    fn bitxor(self, rhs: Self) -> Self {
        ModEvent(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for ModEvent {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Display for ModEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Propagator scheduling priority.
///
/// Lower numeric value runs first to last in `0..=PC_MAX` terms — the
/// propagation loop always drains the *highest* nonempty priority queue
/// first, so propagators execute in strict priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Highest priority class a propagator may request.
    pub const MAX: u8 = 7;

    /// Construct a priority, clamping to `[0, MAX]`.
    ///
    /// Clamping (rather than panicking) favors validated-at-construction
    /// configuration over runtime panics on caller-supplied values that
    /// are merely out of range, not nonsensical.
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX {
            Priority(Self::MAX)
        } else {
            Priority(level)
        }
    }

    /// The lowest scheduling priority (executes last).
    pub const fn lowest() -> Self {
        Priority(0)
    }

    /// The highest scheduling priority (executes first).
    pub const fn highest() -> Self {
        Priority(Self::MAX)
    }

    /// Numeric level, usable as an index into a `[Queue; PC_MAX + 1]`.
    pub const fn level(self) -> usize {
        self.0 as usize
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::lowest()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pc{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigned_intersects_everything_nonzero() {
        assert!(ModEvent::ASSIGNED.intersects(ModEvent(1)));
        assert!(!ModEvent::NONE.intersects(ModEvent(1)));
    }

    #[test]
    fn xor_mask_retires_exactly_latched_bits() {
        let mut pme = ModEvent(0b1010);
        let latched = ModEvent::ASSIGNED;
        pme |= ModEvent::NONE; // simulate a no-op process() pass
        // Latch: pme was set to ASSIGNED by the loop, mask = ASSIGNED.
        let mut latched_pme = latched;
        latched_pme ^= latched;
        assert_eq!(latched_pme, ModEvent::NONE);
        let _ = pme;
    }

    #[test]
    fn priority_clamps_out_of_range() {
        assert_eq!(Priority::new(200).level(), Priority::MAX as usize);
        assert_eq!(Priority::new(3).level(), 3);
    }

    #[test]
    fn priority_ordering_is_numeric() {
        assert!(Priority::new(5) > Priority::new(2));
    }

    proptest::proptest! {
        #[test]
        fn priority_new_never_exceeds_max(level in 0u8..=255) {
            proptest::prop_assert!(Priority::new(level).level() <= Priority::MAX as usize);
        }

        #[test]
        fn mod_event_or_is_commutative(a in 0u32.., b in 0u32..) {
            proptest::prop_assert_eq!(ModEvent(a) | ModEvent(b), ModEvent(b) | ModEvent(a));
        }

        #[test]
        fn mod_event_xor_self_is_none(a in 0u32..) {
            let e = ModEvent(a);
            proptest::prop_assert_eq!(e ^ e, ModEvent::NONE);
        }
    }
}
