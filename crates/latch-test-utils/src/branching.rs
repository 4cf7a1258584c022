//! A minimal branching over [`IntVar`]s: splits the first unassigned
//! variable's domain at its current lower bound.

use std::cell::RefCell;
use std::rc::Rc;

use latch_core::{BranchingId, ExecStatus};
use latch_propagator::{Branching, BranchingDesc, Home};

use crate::int_var::IntVar;

/// Visits `vars` in order, offering a 2-alternative split (`<= mid` or
/// `> mid`) on the first one not yet assigned. Exhausted once every
/// variable is assigned.
pub struct Select {
    id: BranchingId,
    vars: Vec<Rc<RefCell<IntVar>>>,
}

impl Select {
    /// Construct a branching with the given identity over `vars`.
    pub fn new(id: BranchingId, vars: Vec<Rc<RefCell<IntVar>>>) -> Self {
        Self { id, vars }
    }

    fn first_unassigned(&self) -> Option<usize> {
        self.vars.iter().position(|v| !v.borrow().is_assigned())
    }
}

impl Branching for Select {
    fn id(&self) -> BranchingId {
        self.id
    }

    fn status(&self, _home: &dyn Home) -> Option<BranchingDesc> {
        self.first_unassigned().map(|_| BranchingDesc::new(self.id, 2))
    }

    fn commit(&mut self, _home: &mut dyn Home, _desc: &BranchingDesc, alt: u32) -> ExecStatus {
        let Some(idx) = self.first_unassigned() else {
            return ExecStatus::Fix;
        };
        let mut v = self.vars[idx].borrow_mut();
        let mid = v.lo();
        if alt == 0 {
            v.update_max(mid);
        } else {
            v.update_min(mid + 1);
        }
        if v.is_failed() {
            ExecStatus::Failed
        } else {
            ExecStatus::Fix
        }
    }

    fn copy(&self, _share: bool) -> Box<dyn Branching> {
        Box::new(Select {
            id: self.id,
            vars: self.vars.clone(),
        })
    }

    fn dispose(&mut self, _home: &mut dyn Home) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latch_core::VarId;

    #[test]
    fn exhausted_once_every_var_assigned() {
        let v = Rc::new(RefCell::new(IntVar::new(VarId(0), 3, 3)));
        let b = Select::new(BranchingId(0), vec![v]);
        assert!(b.status(&NullHome).is_none());
    }

    #[test]
    fn offers_two_alternatives_for_unassigned() {
        let v = Rc::new(RefCell::new(IntVar::new(VarId(0), 0, 5)));
        let b = Select::new(BranchingId(0), vec![v]);
        let desc = b.status(&NullHome).unwrap();
        assert_eq!(desc.alternatives(), 2);
    }

    struct NullHome;
    impl Home for NullHome {
        fn alloc(&mut self, _bytes: usize) -> latch_arena::BlockHandle {
            unreachable!("test branching never allocates")
        }
        fn reuse(&mut self, _handle: latch_arena::BlockHandle) {
            unreachable!("test branching never allocates")
        }
    }
}
