//! Interrupt-masked critical sections.
//!
//! The timer pool is shared between foreground code and the expiry
//! interrupt. Foreground holds an [`IrqLock`] guard for the whole
//! read-advance-reschedule sequence, which keeps the interrupt from running
//! in the middle of it. The lock word only matters when there is more than
//! one core (or, off-target, more than one thread).

use core::cell::UnsafeCell;
use core::hint;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicBool, Ordering};

use crate::int;

/// Data shared with an interrupt handler.
pub struct IrqLock<T> {
    /// true => held
    held: AtomicBool,
    inner: UnsafeCell<T>,
}

/// Exclusive access to the contents of an [`IrqLock`]. Interrupts stay
/// masked until it is dropped, then go back to how they were before.
pub struct IrqGuard<'a, T> {
    lock: &'a IrqLock<T>,
    /// Whether interrupts were enabled when the guard was taken.
    unmask: bool,
}

unsafe impl<T: Send> Send for IrqLock<T> {}
unsafe impl<T: Send> Sync for IrqLock<T> {}

impl<T> IrqLock<T> {
    pub const fn new(data: T) -> Self {
        Self {
            held: AtomicBool::new(false),
            inner: UnsafeCell::new(data),
        }
    }

    fn acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Mask interrupts and take the lock, spinning while another core holds
    /// it.
    pub fn lock(&self) -> IrqGuard<'_, T> {
        let unmask = int::disable();
        while !self.acquire() {
            while self.held.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }

        IrqGuard { lock: self, unmask }
    }

    /// Take the lock only if nobody holds it. Meant for interrupt handlers,
    /// which must never spin on a lock the code they preempted may hold.
    pub fn try_lock(&self) -> Option<IrqGuard<'_, T>> {
        let unmask = int::disable();
        if self.acquire() {
            Some(IrqGuard { lock: self, unmask })
        } else {
            if unmask {
                int::enable();
            }
            None
        }
    }

    /// Run `f` inside the critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<T> Drop for IrqGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.held.store(false, Ordering::Release);
        if self.unmask {
            int::enable();
        }
    }
}

impl<T> Deref for IrqGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        unsafe { &*self.lock.inner.get() }
    }
}

impl<T> DerefMut for IrqGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.lock.inner.get() }
    }
}
