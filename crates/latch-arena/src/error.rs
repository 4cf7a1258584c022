//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during region allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The segment pool is full — no more segments can be allocated.
    CapacityExceeded {
        /// Bytes requested by the allocation that failed.
        requested: usize,
        /// Total capacity available across all segments.
        capacity: usize,
    },
    /// A [`BlockHandle`](crate::BlockHandle) was passed to `reuse` or a
    /// slice accessor for a block that does not belong to this region
    /// (wrong segment index).
    ForeignHandle {
        /// The segment index named by the handle.
        segment: u16,
        /// Number of segments actually present.
        segment_count: u16,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
            ),
            ArenaError::ForeignHandle {
                segment,
                segment_count,
            } => write!(
                f,
                "handle references segment {segment}, but region only has {segment_count} segment(s)"
            ),
        }
    }
}

impl Error for ArenaError {}
