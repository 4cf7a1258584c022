//! Region/arena allocation for the Latch propagation kernel.
//!
//! Every [`Region`] is bump-allocated from growable [`segment::Segment`]s
//! and layers a size-classed free list on top so that memory released by
//! `reuse` (a subsumed propagator's slot, a discarded branching
//! description) is recycled ahead of growing the segment list. This
//! replaces Gecode's pointer-stashing reuse trick with ordinary indices,
//! since there is no forwarding pointer to hide inside a freed block here.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod region;
pub mod segment;

pub use error::ArenaError;
pub use region::{BlockHandle, Region};
pub use segment::{Segment, SegmentList};
