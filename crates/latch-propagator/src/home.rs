//! The [`Home`] capability a space exposes to actors during execution.

use latch_arena::BlockHandle;

/// Arena access a space grants to actors while they run.
///
/// Named after the upstream kernel's `Space&` parameter threaded through
/// every actor operation: actors never hold their own allocator, they
/// borrow their owning space's for the duration of one call.
pub trait Home {
    /// Bump-allocate `bytes` from the space's region.
    fn alloc(&mut self, bytes: usize) -> BlockHandle;

    /// Return a block to the space's size-class free list.
    fn reuse(&mut self, handle: BlockHandle);
}
