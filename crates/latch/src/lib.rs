//! Latch: a Gecode-style finite-domain constraint propagation kernel.
//!
//! This is the top-level facade crate that re-exports the public API
//! from every Latch sub-crate. For most users, adding `latch` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! Implement [`var::VariableImp`] for a domain type, a handful of
//! [`propagator::Propagator`]s that prune it, and drive them with a
//! [`space::Space`]:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use latch::prelude::*;
//! use latch_test_utils::IntVar;
//!
//! struct Sum { x: Rc<RefCell<IntVar>>, y: Rc<RefCell<IntVar>>, total: i32 }
//!
//! impl Propagator for Sum {
//!     fn priority(&self) -> Priority { Priority::new(1) }
//!
//!     fn propagate(&mut self, _home: &mut dyn Home) -> ExecStatus {
//!         let (x_lo, x_hi) = (self.x.borrow().lo(), self.x.borrow().hi());
//!         self.y.borrow_mut().update_min(self.total - x_hi);
//!         self.y.borrow_mut().update_max(self.total - x_lo);
//!         ExecStatus::Fix
//!     }
//!
//!     fn copy(&self, _share: bool) -> Box<dyn Propagator> {
//!         Box::new(Sum { x: self.x.clone(), y: self.y.clone(), total: self.total })
//!     }
//!
//!     fn dispose(&mut self, _home: &mut dyn Home) -> usize { 0 }
//! }
//!
//! let mut space = Space::new(SpaceConfig::default()).unwrap();
//! let x_id = space.next_var_id();
//! let x = Rc::new(RefCell::new(IntVar::new(x_id, 0, 10)));
//! space.register_var(x.clone());
//! let y_id = space.next_var_id();
//! let y = Rc::new(RefCell::new(IntVar::new(y_id, 0, 10)));
//! space.register_var(y.clone());
//!
//! let prop = space.post(Box::new(Sum { x: x.clone(), y: y.clone(), total: 5 }));
//! space.subscribe(x_id, prop, Priority::new(0), ModEvent::ASSIGNED);
//! assert!(space.propagate());
//! assert_eq!((y.borrow().lo(), y.borrow().hi()), (0, 5));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `latch-core` | Ids, `ModEvent`, `Priority`, `ExecStatus`, `SpaceError` |
//! | [`arena`] | `latch-arena` | `Region`, `BlockHandle`, `Segment`/`SegmentList` |
//! | [`var`] | `latch-var` | `VariableImp`, `VarBase`, `DepList` |
//! | [`propagator`] | `latch-propagator` | `Propagator`, `Branching`, `Home`, `BranchingDesc` |
//! | [`bitset`] | `latch-bitset` | `SmallBitSet` |
//! | [`space`] | `latch-space` | `Space`, `SpaceConfig`, `PropagationQueues` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Ids, events, execution status and error types (`latch-core`).
pub use latch_core as core;

/// Region/arena allocation (`latch-arena`).
pub use latch_arena as arena;

/// The abstract variable contract (`latch-var`).
pub use latch_var as var;

/// Propagator, branching and home traits (`latch-propagator`).
pub use latch_propagator as propagator;

/// `SmallBitSet`, a sparse fixed-capacity bit-set (`latch-bitset`).
pub use latch_bitset as bitset;

/// The propagation engine (`latch-space`).
pub use latch_space as space;

/// Common imports for typical Latch usage.
///
/// ```
/// use latch::prelude::*;
/// ```
pub mod prelude {
    pub use latch_core::{
        BranchingId, ExecStatus, ModEvent, Priority, PropagatorId, SpaceError, VarId,
    };
    pub use latch_propagator::{Branching, BranchingDesc, Home, Propagator};
    pub use latch_space::{Space, SpaceConfig};
    pub use latch_var::{VarBase, VariableImp};
}
