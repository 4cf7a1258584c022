//! Actor traits for the Latch propagation kernel: [`Propagator`] and
//! [`Branching`], plus the [`Home`] capability a space lends them and
//! the [`BranchingDesc`] a branching hands to a search engine.
//!
//! Concrete propagators and branchers (a sum constraint, a
//! first-fail variable selector) are external collaborators built on
//! these traits; none are defined in this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod branching;
pub mod home;
pub mod propagator;

pub use branching::{Branching, BranchingDesc};
pub use home::Home;
pub use propagator::Propagator;
