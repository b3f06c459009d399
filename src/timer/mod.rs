//! # Timer pool
//!
//! A fixed pool of software timers multiplexed onto one [`HardTimer`].
//!
//! Every change that can move the earliest pending expiry goes through the
//! same two steps: advance all running timers by the time that has elapsed
//! on the hardware, firing whatever expires, then reprogram the hardware to
//! interrupt at the new earliest expiry (or stop it when nothing runs).

mod handle;
mod slot;

pub use handle::TimerHandle;

use log_crate::{debug, trace, warn};

use crate::consts::{DEFAULT_CAPACITY, MIN_RELOAD_MS, RELOAD_CEILING_MS};
use crate::err::{Error, Result};
use crate::hard::HardTimer;
use handle::PoolId;
use slot::{Slot, SlotState};

/// Expiry callback. Runs in the context that delivered the expiry, usually
/// the timer interrupt, with the pool locked: it must be short, must not
/// block and must not call back into the pool.
pub type Callback = fn(TimerHandle);

/// A pool of `N` software timers driven by the hardware timer `H`.
///
/// The pool is a plain value; see [`IrqLock`](crate::sync::IrqLock)
/// for sharing it with the expiry interrupt.
pub struct SoftTimers<H, const N: usize = DEFAULT_CAPACITY> {
    id: PoolId,
    hard: H,
    max_reload_ms: u32,
    slots: [Slot; N],
}

impl<H: HardTimer, const N: usize> SoftTimers<H, N> {
    const CAPACITY_FITS: () = assert!(N > 0 && N <= 256, "pool capacity must be in 1..=256");

    /// Create a pool with every slot free and initialize the hardware.
    /// `max_reload_ms` is the largest reload the hardware can hold; it is
    /// clamped to [`RELOAD_CEILING_MS`].
    #[allow(clippy::let_unit_value)]
    pub fn new(mut hard: H, max_reload_ms: u32) -> Self {
        let () = Self::CAPACITY_FITS;

        let max_reload_ms = max_reload_ms.min(RELOAD_CEILING_MS);
        hard.init(max_reload_ms);
        debug!("Initialized {} software timers, max reload {}ms", N, max_reload_ms);

        Self {
            id: PoolId::next(),
            hard,
            max_reload_ms,
            slots: [Slot::FREE; N],
        }
    }

    /// Re-initialize an existing pool. Only the maximum reload changes;
    /// timers, including running ones, and the hardware are left alone.
    pub fn init(&mut self, max_reload_ms: u32) {
        self.max_reload_ms = max_reload_ms.min(RELOAD_CEILING_MS);
        debug!(
            "Already initialized, max reload now {}ms",
            self.max_reload_ms
        );
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn max_reload_ms(&self) -> u32 {
        self.max_reload_ms
    }

    pub fn hard(&self) -> &H {
        &self.hard
    }

    pub fn hard_mut(&mut self) -> &mut H {
        &mut self.hard
    }

    /// Claim a free timer. It starts out stopped and unconfigured. Returns
    /// `None` when every slot is taken.
    pub fn create(&mut self) -> Option<TimerHandle> {
        let pool = self.id;
        let found = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.state == SlotState::Free);

        match found {
            Some((index, slot)) => {
                slot.state = SlotState::Stopped;
                slot.repeat = false;
                debug!("Created timer {}", index);
                Some(TimerHandle::new(pool, index, slot.generation))
            }
            None => {
                warn!("No free software timer ({} in use)", N);
                None
            }
        }
    }

    /// Return a stopped timer to the pool. The handle, and every copy of
    /// it, is invalid afterwards.
    pub fn destroy(&mut self, handle: TimerHandle) -> Result<()> {
        let slot = self.slot_mut(handle)?;
        if slot.state != SlotState::Stopped {
            return Err(Error::InvalidState);
        }

        slot.release();
        debug!("Destroyed timer {}", handle.id());
        Ok(())
    }

    /// Configure a stopped timer. `reload_ms` must lie within
    /// `MIN_RELOAD_MS..=max_reload_ms`.
    pub fn set(
        &mut self,
        handle: TimerHandle,
        callback: Option<Callback>,
        reload_ms: u32,
        repeat: bool,
    ) -> Result<()> {
        let max_reload_ms = self.max_reload_ms;
        let slot = self.slot_mut(handle)?;

        if !(MIN_RELOAD_MS..=max_reload_ms).contains(&reload_ms) {
            return Err(Error::InvalidParameter);
        }

        if slot.state != SlotState::Stopped {
            return Err(Error::InvalidState);
        }

        slot.reload_ms = reload_ms;
        slot.repeat = repeat;
        slot.callback = callback;
        Ok(())
    }

    /// Start a stopped, configured timer. It expires `reload_ms` from now.
    pub fn start(&mut self, handle: TimerHandle) -> Result<()> {
        let slot = self.slot(handle)?;
        if slot.state != SlotState::Stopped || !slot.is_configured() {
            return Err(Error::InvalidState);
        }

        // Bring every other timer up to now before inserting this one.
        let elapsed_ms = self.hard.counter();
        self.update(elapsed_ms);

        self.slots[handle.index()].start();
        debug!("Started timer {}", handle.id());

        self.update(0);
        Ok(())
    }

    /// Stop a running timer without firing it.
    pub fn stop(&mut self, handle: TimerHandle) -> Result<()> {
        let slot = self.slot_mut(handle)?;
        if slot.countdown_ms().is_none() {
            return Err(Error::InvalidState);
        }

        slot.stop();
        debug!("Stopped timer {}", handle.id());

        let elapsed_ms = self.hard.counter();
        self.update(elapsed_ms);
        Ok(())
    }

    /// Whether `handle` refers to a live timer that is stopped.
    pub fn is_stopped(&self, handle: TimerHandle) -> bool {
        matches!(self.slot(handle), Ok(slot) if slot.state == SlotState::Stopped)
    }

    /// Whether `handle` refers to a live timer that is running.
    pub fn is_running(&self, handle: TimerHandle) -> bool {
        matches!(self.slot(handle), Ok(slot) if slot.countdown_ms().is_some())
    }

    /// The countdown of a running timer, as of the last update.
    pub fn countdown_ms(&self, handle: TimerHandle) -> Option<u32> {
        self.slot(handle).ok().and_then(Slot::countdown_ms)
    }

    /// The smallest countdown across all running timers, as of the last
    /// update. `None` when no timer runs.
    pub fn next_timeout_ms(&self) -> Option<u32> {
        Self::earliest(&self.slots)
    }

    /// Entry point for the hardware expiry interrupt: the whole programmed
    /// reload has elapsed, plus the inclusive millisecond.
    pub fn on_hardware_expiry(&mut self) {
        let elapsed_ms = self.hard.reload().saturating_add(1);
        self.update(elapsed_ms);
    }

    fn slot(&self, handle: TimerHandle) -> Result<&Slot> {
        if handle.pool() != self.id {
            return Err(Error::InvalidParameter);
        }

        match self.slots.get(handle.index()) {
            Some(slot) if slot.generation == handle.generation() => Ok(slot),
            _ => Err(Error::InvalidParameter),
        }
    }

    fn slot_mut(&mut self, handle: TimerHandle) -> Result<&mut Slot> {
        self.slot(handle)?;
        Ok(&mut self.slots[handle.index()])
    }

    /// Advance by `elapsed_ms` and reprogram the hardware.
    fn update(&mut self, elapsed_ms: u32) {
        let next_ms = self.advance(elapsed_ms);
        self.reschedule(next_ms);
    }

    /// Step every slot by `step_ms`, firing expired callbacks. Returns the
    /// reload that makes the hardware interrupt at the next expiry.
    fn advance(&mut self, step_ms: u32) -> Option<u32> {
        let pool = self.id;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let handle = TimerHandle::new(pool, index, slot.generation);
            slot.step(handle, step_ms);
        }

        Self::earliest(&self.slots)
    }

    fn earliest(slots: &[Slot]) -> Option<u32> {
        slots.iter().filter_map(Slot::countdown_ms).min()
    }

    fn reschedule(&mut self, next_ms: Option<u32>) {
        match next_ms {
            Some(ms) => {
                let reload_ms = ms.min(self.max_reload_ms);
                trace!("Next timeout in {}ms, reload {}ms", ms, reload_ms);
                self.hard.set_reload(reload_ms);
                self.hard.start();
            }
            None => {
                trace!("No timer running, stopping hardware");
                self.hard.stop();
            }
        }
    }
}
