make_id!(
    /// Distinguishes pools from one another, so that a handle can only ever
    /// be used with the pool that issued it.
    pub(crate) PoolId
);

/// An opaque reference to one software timer.
///
/// Handles are cheap to copy and are validated on every use. Destroying a
/// timer invalidates every copy of its handle; a later
/// [`create`](super::SoftTimers::create) may reuse the slot, but under a new
/// handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    pool: PoolId,
    index: u8,
    generation: u32,
}

impl TimerHandle {
    pub(super) fn new(pool: PoolId, index: usize, generation: u32) -> Self {
        Self {
            pool,
            index: index as u8,
            generation,
        }
    }

    /// The sequential id of the slot behind this handle, in `0..N`.
    pub fn id(&self) -> u8 {
        self.index
    }

    pub(super) fn pool(&self) -> PoolId {
        self.pool
    }

    pub(super) fn index(&self) -> usize {
        self.index as usize
    }

    pub(super) fn generation(&self) -> u32 {
        self.generation
    }
}
