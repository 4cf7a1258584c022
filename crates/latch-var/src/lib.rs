//! Abstract variable contract for the Latch propagation kernel.
//!
//! Concrete variable domains are deliberately out of scope here: this
//! crate provides only the dependency-list/PME
//! bookkeeping ([`dep::DepList`], [`variable::VarBase`]) and the
//! [`VariableImp`] trait an external domain type implements to plug into
//! a space's propagation and cloning machinery.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dep;
pub mod variable;

pub use dep::{DepList, Subscription};
pub use variable::{VarBase, VariableImp};
