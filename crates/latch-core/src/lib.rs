//! Core identifiers, status codes and error types for the Latch
//! constraint-propagation kernel.
//!
//! This is the leaf crate with zero internal Latch dependencies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod exec;
pub mod id;

pub use error::SpaceError;
pub use event::{ModEvent, Priority};
pub use exec::ExecStatus;
pub use id::{BranchingId, BranchingIdCounter, PropagatorId, SpaceInstanceId, VarId};
