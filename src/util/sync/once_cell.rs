//! Single-initialization storage.

use core::cell::UnsafeCell;
use core::mem::MaybeUninit;
use core::ops::Deref;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::int;

const EMPTY: u8 = 0;
const INITIALIZING: u8 = 1;
const READY: u8 = 2;

/// A storage location which can be initialized once at runtime.
pub struct OnceCell<T> {
    inner: UnsafeCell<MaybeUninit<T>>,
    state: AtomicU8,
}

unsafe impl<T: Send> Send for OnceCell<T> {}
unsafe impl<T: Send + Sync> Sync for OnceCell<T> {}

impl<T> OnceCell<T> {
    /// Create an empty cell.
    pub const fn new() -> OnceCell<T> {
        OnceCell {
            inner: UnsafeCell::new(MaybeUninit::uninit()),
            state: AtomicU8::new(EMPTY),
        }
    }

    /// Initialize the cell, handing the data back if it was already
    /// initialized.
    pub fn try_init(&self, data: T) -> Result<(), T> {
        let interrupts = int::disable();

        let ret = if self
            .state
            .compare_exchange(EMPTY, INITIALIZING, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            unsafe { (*self.inner.get()).as_mut_ptr().write(data) };
            self.state.store(READY, Ordering::Release);
            Ok(())
        } else {
            Err(data)
        };

        if interrupts {
            int::enable();
        }
        ret
    }

    /// Initialize the cell. Panics if double-initialized.
    pub fn init(&self, data: T) {
        if self.try_init(data).is_err() {
            panic!("Tried to double-initialize OnceCell.");
        }
    }

    /// Get a reference to the contents, if initialization has already occurred.
    pub fn borrow(&self) -> Option<&T> {
        if self.state.load(Ordering::Acquire) == READY {
            Some(unsafe { &*(*self.inner.get()).as_ptr() })
        } else {
            None
        }
    }
}

impl<T> Deref for OnceCell<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.borrow()
            .expect("Tried to dereference an uninitialized OnceCell.")
    }
}

impl<T> Drop for OnceCell<T> {
    fn drop(&mut self) {
        if *self.state.get_mut() == READY {
            unsafe { core::ptr::drop_in_place((*self.inner.get()).as_mut_ptr()) };
        }
    }
}
