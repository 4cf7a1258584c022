//! The Latch propagation engine: [`Space`], its arena, queues and
//! fixpoint loop.
//!
//! Variable domains and concrete propagators/branchings are external
//! collaborators built on `latch-var`/`latch-propagator`'s traits; this
//! crate owns only the scheduling and memory bookkeeping that drives
//! them to a fixpoint.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod queue;
mod slot;
pub mod space;

pub use config::{ConfigError, SpaceConfig};
pub use queue::PropagationQueues;
pub use space::{Space, Statistics};
