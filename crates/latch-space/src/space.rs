//! The propagation engine: [`Space`] and its fixpoint loop.

use std::cell::RefCell;
use std::rc::Rc;

use latch_arena::{BlockHandle, Region};
use latch_core::{
    BranchingId, BranchingIdCounter, ExecStatus, ModEvent, Priority, PropagatorId, SpaceError,
    SpaceInstanceId, VarId,
};
use latch_propagator::{Branching, BranchingDesc, Home, Propagator};
use latch_var::VariableImp;

use crate::config::SpaceConfig;
use crate::queue::PropagationQueues;
use crate::slot::PropagatorSlot;

/// Counters a caller may want after a `propagate`/`step` call, for
/// diagnostics or search heuristics. Not part of the propagation
/// contract itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of propagator dispatches since the space was created (or,
    /// for a clone, since the clone was made).
    pub propagations: u64,
}

/// A constraint space: variables, propagators and branchings, plus the
/// bookkeeping (arena, queues, PME) that drives them to a fixpoint.
///
/// Variables are registered once and never removed, propagators are
/// posted and may later be subsumed (their slot freed), and branchings
/// are consulted in creation order by `description`/`commit`.
pub struct Space {
    instance_id: SpaceInstanceId,
    config: SpaceConfig,
    region: Region,
    vars: Vec<Option<Rc<RefCell<dyn VariableImp>>>>,
    propagators: Vec<Option<PropagatorSlot>>,
    branchings: Vec<Option<Box<dyn Branching>>>,
    b_status: usize,
    b_commit: usize,
    branching_ids: BranchingIdCounter,
    queues: PropagationQueues,
    failed: bool,
    stats: Statistics,
}

impl Space {
    /// Construct an empty space from `config`, validating it first.
    pub fn new(config: SpaceConfig) -> Result<Self, crate::config::ConfigError> {
        config.validate()?;
        Ok(Self {
            instance_id: SpaceInstanceId::next(),
            config,
            region: Region::new(config.segment_size, config.max_segments),
            vars: Vec::new(),
            propagators: Vec::new(),
            branchings: Vec::new(),
            b_status: 0,
            b_commit: 0,
            branching_ids: BranchingIdCounter::new(),
            queues: PropagationQueues::new(),
            failed: false,
            stats: Statistics::default(),
        })
    }

    /// This instance's identity, stable across the space's lifetime and
    /// distinct from every other space instance including its own clones.
    pub fn instance_id(&self) -> SpaceInstanceId {
        self.instance_id
    }

    /// `true` once any propagator has reported [`ExecStatus::Failed`].
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Mark the space as failed directly, without going through a
    /// propagator. Idempotent.
    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// Counters accumulated since construction (or since the clone this
    /// instance was made from).
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Number of live (non-subsumed) propagators.
    pub fn propagators(&self) -> Result<usize, SpaceError> {
        if self.failed {
            return Err(SpaceError::Failed { op: "propagators" });
        }
        Ok(self.propagators.iter().filter(|p| p.is_some()).count())
    }

    /// Number of live (non-disposed) branchings.
    pub fn branchings(&self) -> Result<usize, SpaceError> {
        if self.failed {
            return Err(SpaceError::Failed { op: "branchings" });
        }
        Ok(self.branchings.iter().filter(|b| b.is_some()).count())
    }

    /// The id the next [`Space::register_var`] call will assign.
    ///
    /// A concrete variable's own id field must be set to this value
    /// *before* it is registered, since [`VariableImp::id`] is read-only
    /// at registration time.
    pub fn next_var_id(&self) -> VarId {
        VarId(self.vars.len() as u32)
    }

    /// Register a variable constructed with the id from
    /// [`Space::next_var_id`], returning that same id back for convenience.
    ///
    /// # Panics
    ///
    /// Panics if `var`'s own id does not match `next_var_id()` at the
    /// time of the call — registration order must match id assignment.
    pub fn register_var(&mut self, var: Rc<RefCell<dyn VariableImp>>) -> VarId {
        let id = var.borrow().id();
        assert_eq!(
            id,
            self.next_var_id(),
            "variable registered out of id order"
        );
        self.vars.push(Some(var));
        id
    }

    /// Shared access to a registered variable, by id.
    pub fn variable(&self, id: VarId) -> Option<Rc<RefCell<dyn VariableImp>>> {
        self.vars.get(id.0 as usize).and_then(|v| v.clone())
    }

    /// Subscribe `prop` to `var`'s events matching `interest`, scheduled
    /// at `priority` when notified.
    pub fn subscribe(&mut self, var: VarId, prop: PropagatorId, priority: Priority, interest: ModEvent) {
        if let Some(Some(v)) = self.vars.get(var.0 as usize) {
            v.borrow_mut()
                .dependencies_mut()
                .subscribe(prop, priority, interest);
        }
    }

    /// Cancel a previously established subscription.
    pub fn cancel(&mut self, var: VarId, prop: PropagatorId, priority: Priority) {
        if let Some(Some(v)) = self.vars.get(var.0 as usize) {
            v.borrow_mut().dependencies_mut().cancel(prop, priority);
        }
    }

    /// Post a propagator, scheduling it for an initial run at its own
    /// declared priority.
    ///
    /// Reuses the lowest-index slot freed by a prior subsumption before
    /// growing the table, so a newly posted propagator may land at the
    /// exact `PropagatorId` an earlier, now-subsumed one held.
    pub fn post(&mut self, propagator: Box<dyn Propagator>) -> PropagatorId {
        let slot = PropagatorSlot::new(propagator);
        let priority = slot.priority();
        let id = match self.propagators.iter().position(Option::is_none) {
            Some(idx) => {
                self.propagators[idx] = Some(slot);
                PropagatorId(idx as u32)
            }
            None => {
                let id = PropagatorId(self.propagators.len() as u32);
                self.propagators.push(Some(slot));
                id
            }
        };
        self.queues.put(priority, id);
        id
    }

    /// Post a branching, appended after every existing one in commit order.
    pub fn post_branching(&mut self, branching: Box<dyn Branching>) {
        self.branchings.push(Some(branching));
    }

    /// Allocate the next [`BranchingId`] for a branching about to be
    /// constructed.
    pub fn next_branching_id(&mut self) -> BranchingId {
        self.branching_ids.next()
    }

    /// Drain every variable's accumulated events into its subscribers'
    /// PME, scheduling any propagator not already queued.
    fn process(&mut self) {
        for var in self.vars.iter().flatten() {
            let events = var.borrow_mut().take_pme();
            if events.is_none() {
                continue;
            }
            let subs: Vec<_> = var.borrow().dependencies().iter().copied().collect();
            for sub in subs {
                if !events.intersects(sub.interest) {
                    continue;
                }
                if let Some(Some(slot)) = self.propagators.get_mut(sub.propagator.0 as usize) {
                    slot.pme |= events & sub.interest;
                    if !slot.queued {
                        slot.queued = true;
                        self.queues.put(sub.priority, sub.propagator);
                    }
                }
            }
        }
    }

    /// Run `process()`, dispatch exactly one ready propagator (if any),
    /// latch its PME and return its status, or [`ExecStatus::Stable`] if
    /// nothing was ready.
    ///
    /// [`Space::propagate`] is this loop run to completion; [`Space::step`]
    /// exposes a single iteration for callers that want to interleave
    /// their own inspection between dispatches.
    pub fn step(&mut self) -> ExecStatus {
        if self.failed {
            return ExecStatus::Stable;
        }
        self.process();
        let Some(id) = self.queues.get() else {
            return ExecStatus::Stable;
        };
        self.stats.propagations += 1;
        let mut slot = self.propagators[id.0 as usize]
            .take()
            .expect("queued propagator id must have an occupied slot");
        slot.queued = false;
        let status = slot.propagator.propagate(self);
        if status.is_failed() {
            self.failed = true;
            self.propagators[id.0 as usize] = Some(slot);
            return status;
        }
        let pme_mask = match status {
            ExecStatus::Fix => {
                slot.pme = ModEvent::ASSIGNED;
                ModEvent::ASSIGNED
            }
            ExecStatus::NoFix => {
                slot.pme = ModEvent::NONE;
                ModEvent::NONE
            }
            ExecStatus::Subsumed { .. } => ModEvent::ASSIGNED,
            ExecStatus::FixPartial(retained) => {
                slot.pme = ModEvent::ASSIGNED;
                slot.queued = true;
                self.queues.put(slot.priority(), id);
                ModEvent::ASSIGNED ^ retained
            }
            ExecStatus::NofixPartial(retained) => {
                slot.pme = retained;
                slot.queued = true;
                self.queues.put(slot.priority(), id);
                ModEvent::NONE
            }
            ExecStatus::Failed | ExecStatus::Stable => unreachable!(),
        };
        if !matches!(status, ExecStatus::Subsumed { .. }) {
            self.propagators[id.0 as usize] = Some(slot);
        }
        self.process();
        if let Some(Some(slot)) = self.propagators.get_mut(id.0 as usize) {
            slot.pme ^= pme_mask;
        }
        status
    }

    /// Run [`Space::step`] to completion: either every propagator queue
    /// drains (`true`, stable) or one reports failure (`false`).
    pub fn propagate(&mut self) -> bool {
        loop {
            match self.step() {
                ExecStatus::Stable => return true,
                ExecStatus::Failed => return false,
                _ => continue,
            }
        }
    }

    /// `true` once every propagation queue is empty, without running
    /// anything — unlike `propagate`, never advances state.
    pub fn stable(&self) -> bool {
        self.queues.is_stable()
    }

    /// Ask the current branching (if any) for a description, advancing
    /// past any branching that reports itself exhausted.
    pub fn description(&mut self) -> Option<BranchingDesc> {
        loop {
            let desc = match self.branchings.get(self.b_status) {
                None => return None,
                Some(None) => None,
                Some(Some(b)) => b.status(self),
            };
            match desc {
                Some(desc) => return Some(desc),
                None => self.b_status += 1,
            }
        }
    }

    /// Commit `desc`'s `alt`-th alternative, discarding any branching
    /// ahead of `desc`'s originating one along the way.
    pub fn commit(&mut self, desc: &BranchingDesc, alt: u32) -> Result<(), SpaceError> {
        if self.failed {
            return Ok(());
        }
        loop {
            if self.b_commit >= self.branchings.len() {
                return Err(SpaceError::NoBranching);
            }
            let Some(mut branching) = self.branchings[self.b_commit].take() else {
                self.b_commit += 1;
                continue;
            };
            if branching.id() != desc.id() {
                #[cfg(debug_assertions)]
                eprintln!(
                    "latch-space: commit() skipped past branching {:?} looking for {:?}; \
                     desc is likely stale (commit was already called since it was produced)",
                    branching.id(),
                    desc.id()
                );
                branching.dispose(self);
                self.b_commit += 1;
                continue;
            }
            if alt >= desc.alternatives() {
                self.branchings[self.b_commit] = Some(branching);
                return Err(SpaceError::IllegalAlternative {
                    requested: alt,
                    alternatives: desc.alternatives(),
                });
            }
            let status = branching.commit(self, desc, alt);
            self.branchings[self.b_commit] = Some(branching);
            if status.is_failed() {
                self.failed = true;
            }
            return Ok(());
        }
    }

    /// Deep-copy every variable, propagator and branching into a new
    /// independent space.
    ///
    /// Indices (`VarId`, `PropagatorId`) are preserved 1:1 between
    /// parent and clone, so dependency-list entries copied out of a
    /// parent variable are already valid in the clone — there is no
    /// pointer-forwarding fixup pass to run afterward.
    pub fn clone_space(&mut self, share: bool) -> Result<Space, SpaceError> {
        if self.failed || !self.propagate() {
            return Err(SpaceError::Failed { op: "clone" });
        }
        let region = Region::new(self.config.segment_size, self.config.max_segments);
        let vars = self
            .vars
            .iter()
            .map(|slot| slot.as_ref().map(|v| v.borrow().copy(share)))
            .collect();
        let propagators = self
            .propagators
            .iter()
            .map(|slot| {
                slot.as_ref().map(|s| PropagatorSlot {
                    propagator: s.propagator.copy(share),
                    pme: s.pme,
                    priority: s.priority,
                    queued: s.queued,
                })
            })
            .collect();
        let branchings = self
            .branchings
            .iter()
            .map(|b| b.as_ref().map(|b| b.copy(share)))
            .collect();
        Ok(Space {
            instance_id: SpaceInstanceId::next(),
            config: self.config,
            region,
            vars,
            propagators,
            branchings,
            b_status: self.b_status,
            b_commit: self.b_commit,
            branching_ids: BranchingIdCounter::resume_from(self.branching_ids.value()),
            queues: PropagationQueues::new(),
            failed: false,
            stats: Statistics::default(),
        })
    }

    /// Total backing memory currently held by this space's arena.
    pub fn memory_bytes(&self) -> usize {
        self.region.memory_bytes()
    }
}

impl Drop for Space {
    /// Force `dispose` on every propagator and branching still
    /// registered, whether or not it was ever scheduled.
    ///
    /// A subsumed propagator or a branching discarded during `commit`
    /// has already been disposed and removed from its table (its slot
    /// is `None` by the time this runs); everything still `Some` here
    /// was never otherwise given a chance to release its arena block.
    fn drop(&mut self) {
        let propagators: Vec<_> = self.propagators.drain(..).flatten().collect();
        for mut slot in propagators {
            slot.propagator.dispose(self);
        }
        let branchings: Vec<_> = self.branchings.drain(..).flatten().collect();
        for mut branching in branchings {
            branching.dispose(self);
        }
    }
}

impl Home for Space {
    fn alloc(&mut self, bytes: usize) -> BlockHandle {
        self.region
            .alloc(bytes)
            .unwrap_or_else(|e| panic!("arena allocation failed: {e}"))
    }

    fn reuse(&mut self, handle: BlockHandle) {
        self.region.reuse(handle);
    }
}
