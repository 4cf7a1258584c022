//! A compact sparse bit-set for extensional (table) constraint
//! propagators.
//!
//! [`SmallBitSet`] packs an active-slot count and a slot→column
//! permutation into a single 64-bit index word, backing up to fifteen
//! 64-bit data words. Masking operations compact the active region in
//! place by swapping a zeroed slot with the last active one, so the set
//! never scans past its current `words()` count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod idx;
mod set;

pub use set::SmallBitSet;
