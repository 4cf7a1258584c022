//! Error types shared across the kernel.
//!
//! Plain enums implementing [`std::fmt::Display`] and
//! [`std::error::Error`] by hand, no derive macro crate. Two error
//! families exist:
//!
//! - [`SpaceError`]: usage errors raised to the caller — recoverable,
//!   leaving the space unchanged (aside from `SpaceFailed` itself,
//!   which can only be raised on an already-failed space).
//! - A propagator's own domain-specific failure is not part of this
//!   crate at all: propagators report failure through
//!   [`crate::ExecStatus::Failed`], not by returning a `Result`.

use std::fmt;

/// Usage errors raised by `Space` operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// An operation was attempted on a space that has already failed.
    ///
    /// Carries the name of the attempted operation for diagnostics,
    /// mirroring Gecode's `SpaceFailed(op)`.
    Failed {
        /// Name of the operation that was rejected, e.g. `"clone"`.
        op: &'static str,
    },
    /// `commit` was called with no current branching left to commit to.
    NoBranching,
    /// `commit` was called with `alt >= description.alternatives()`.
    IllegalAlternative {
        /// The alternative index that was requested.
        requested: u32,
        /// The number of alternatives the description actually offers.
        alternatives: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceError::Failed { op } => write!(f, "space has failed: {op} is not available"),
            SpaceError::NoBranching => write!(f, "commit: no branching left to commit to"),
            SpaceError::IllegalAlternative {
                requested,
                alternatives,
            } => write!(
                f,
                "commit: alternative {requested} out of range (description offers {alternatives})"
            ),
        }
    }
}

impl std::error::Error for SpaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_operation_name() {
        let e = SpaceError::Failed { op: "clone" };
        assert!(e.to_string().contains("clone"));
    }

    #[test]
    fn illegal_alternative_display_has_both_numbers() {
        let e = SpaceError::IllegalAlternative {
            requested: 2,
            alternatives: 2,
        };
        let s = e.to_string();
        assert!(s.contains('2'));
    }
}
