//! Size-classed regions built on top of [`SegmentList`].
//!
//! A [`Region`] is the per-`Space` allocator: propagators, branchings and
//! variable implementations that want raw storage outside their own
//! struct (a bitset's backing words, a branching's saved alternatives)
//! allocate a [`BlockHandle`] from it. Blocks released via [`Region::reuse`]
//! are threaded onto a free list keyed by size class, so that recycled
//! space (a subsumed propagator, a committed-and-discarded branching
//! description) is served before the segment list ever grows.

use crate::error::ArenaError;
use crate::segment::SegmentList;

/// A handle to a block of bytes allocated from a [`Region`].
///
/// Opaque outside this crate beyond its `len`; round-trips through
/// [`Region::slice`]/[`Region::slice_mut`]/[`Region::reuse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHandle {
    segment: u16,
    offset: u32,
    len: u32,
}

impl BlockHandle {
    /// Length in bytes of the block this handle refers to.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if the block is zero-length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn size_class(&self) -> u32 {
        size_class(self.len)
    }
}

/// Rounds `len` up to the next power of two, with a floor of 8 bytes.
///
/// Blocks are bucketed by size class rather than exact length so that a
/// free list built from e.g. a 12-byte block can serve a later 10-byte
/// request without fragmenting into ever-smaller remainders.
fn size_class(len: u32) -> u32 {
    len.max(8).next_power_of_two()
}

/// A region allocator: a growable segment list plus a size-classed free
/// list of reusable blocks.
pub struct Region {
    segments: SegmentList,
    /// Free list: each entry is a class's singly-linked chain, stored as
    /// a plain `Vec` of handles rather than an intrusive link — pop/push
    /// from the back is O(1) and there is no pointer to keep valid across
    /// a clone.
    free_lists: Vec<(u32, Vec<BlockHandle>)>,
    allocated: usize,
}

impl Region {
    /// Create a new region with the given per-segment size and segment cap.
    pub fn new(segment_size: usize, max_segments: u16) -> Self {
        Self {
            segments: SegmentList::new(segment_size, max_segments),
            free_lists: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate `len` bytes, preferring a recycled block of the matching
    /// size class over growing the segment list.
    pub fn alloc(&mut self, len: usize) -> Result<BlockHandle, ArenaError> {
        let len = len as u32;
        let class = size_class(len);
        if let Some(list) = self.free_list_for_mut(class) {
            if let Some(mut handle) = list.pop() {
                handle.len = len;
                self.allocated += len as usize;
                return Ok(handle);
            }
        }
        let (segment, offset) = self.segments.alloc(class as usize)?;
        self.allocated += len as usize;
        Ok(BlockHandle {
            segment,
            offset,
            len,
        })
    }

    /// Return a previously allocated block to the free list for later reuse.
    ///
    /// The handle becomes invalid for `slice`/`slice_mut` access after this
    /// call; callers (a subsumed propagator's slot, a discarded branching
    /// description) must not read through it again.
    pub fn reuse(&mut self, handle: BlockHandle) {
        self.allocated = self.allocated.saturating_sub(handle.len as usize);
        let class = handle.size_class();
        if self.free_list_for_mut(class).is_none() {
            self.free_lists.push((class, Vec::new()));
        }
        self.free_list_for_mut(class)
            .expect("just inserted")
            .push(handle);
    }

    /// Shared slice view of a block's bytes.
    pub fn slice(&self, handle: BlockHandle) -> Result<&[u8], ArenaError> {
        self.segments.slice(handle.segment, handle.offset, handle.len)
    }

    /// Mutable slice view of a block's bytes.
    pub fn slice_mut(&mut self, handle: BlockHandle) -> Result<&mut [u8], ArenaError> {
        self.segments
            .slice_mut(handle.segment, handle.offset, handle.len)
    }

    /// Bytes currently considered allocated (excludes freed-but-not-reused
    /// padding from size-class rounding).
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Total backing memory held by the underlying segments.
    pub fn memory_bytes(&self) -> usize {
        self.segments.memory_bytes()
    }

    fn free_list_for_mut(&mut self, class: u32) -> Option<&mut Vec<BlockHandle>> {
        self.free_lists
            .iter_mut()
            .find(|(c, _)| *c == class)
            .map(|(_, list)| list)
    }
}
