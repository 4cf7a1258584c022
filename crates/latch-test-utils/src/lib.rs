//! Toy variable and propagator implementations shared by this
//! workspace's test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod branching;
pub mod int_var;
pub mod propagators;

pub use branching::Select;
pub use int_var::IntVar;
pub use propagators::{Equal, Sum};
