//! Criterion micro-benchmarks for the propagation fixpoint loop.

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use latch_core::{ModEvent, Priority};
use latch_space::{Space, SpaceConfig};
use latch_test_utils::{IntVar, Sum};
use latch_var::VariableImp;

/// Build a chain of `n` variables linked by `n - 1` `Sum` propagators:
/// `v0 + v1 = 10`, `v1 + v2 = 10`, ... Assigning `v0` then forces a
/// cascade of bounds-tightening across the whole chain.
fn make_chain(n: usize) -> (Space, Vec<Rc<RefCell<IntVar>>>) {
    let mut space = Space::new(SpaceConfig::default()).unwrap();
    let vars: Vec<_> = (0..n)
        .map(|_| {
            let id = space.next_var_id();
            let v = Rc::new(RefCell::new(IntVar::new(id, 0, 10)));
            space.register_var(v.clone());
            v
        })
        .collect();
    for w in vars.windows(2) {
        let (x, y) = (w[0].clone(), w[1].clone());
        let (x_id, y_id) = (x.borrow().id(), y.borrow().id());
        let prop = space.post(Box::new(Sum::new(x, y, 10)));
        space.subscribe(x_id, prop, Priority::new(0), ModEvent::ASSIGNED);
        space.subscribe(y_id, prop, Priority::new(0), ModEvent::ASSIGNED);
    }
    (space, vars)
}

/// Benchmark: propagate a 64-variable Sum chain to a stable fixpoint
/// after narrowing the first variable to a single value.
fn bench_propagate_chain_64(c: &mut Criterion) {
    c.bench_function("propagate_chain_64", |b| {
        b.iter(|| {
            let (mut space, vars) = make_chain(64);
            {
                let mut first = vars[0].borrow_mut();
                first.update_max(3);
                first.accumulate(ModEvent::ASSIGNED);
            }
            let stable = space.propagate();
            black_box(stable);
        });
    });
}

/// Benchmark: post and subscribe 64 propagators without propagating,
/// isolating setup cost from fixpoint cost.
fn bench_post_chain_64(c: &mut Criterion) {
    c.bench_function("post_chain_64", |b| {
        b.iter(|| {
            let (space, _vars) = make_chain(64);
            black_box(space.propagators());
        });
    });
}

/// Benchmark: clone a stable 64-variable chain.
fn bench_clone_chain_64(c: &mut Criterion) {
    c.bench_function("clone_chain_64", |b| {
        b.iter(|| {
            let (mut space, vars) = make_chain(64);
            {
                let mut first = vars[0].borrow_mut();
                first.update_max(3);
                first.accumulate(ModEvent::ASSIGNED);
            }
            space.propagate();
            let clone = space.clone_space(true).unwrap();
            black_box(clone);
        });
    });
}

criterion_group!(
    benches,
    bench_propagate_chain_64,
    bench_post_chain_64,
    bench_clone_chain_64
);
criterion_main!(benches);
