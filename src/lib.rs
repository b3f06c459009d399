//! # Software timers
//!
//! Virtualizes a single hardware countdown timer into a fixed pool of
//! independent software timers. Each software timer has its own period,
//! repeat setting and expiry callback; the pool keeps the hardware timer
//! programmed to fire at the earliest pending expiry.
//!
//! The context type is [`SoftTimers`]. Firmware normally keeps it in a
//! [`IrqLock`](sync::IrqLock) so that foreground calls and the expiry
//! interrupt are serialized:
//!
//! ```ignore
//! static TIMERS: OnceCell<IrqLock<SoftTimers<Tim2>>> = OnceCell::new();
//!
//! fn tim2_isr() {
//!     TIMERS.lock().on_hardware_expiry();
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod util;

pub mod consts;
pub mod err;
pub mod hard;
pub mod int;
#[cfg(any(test, feature = "logger"))]
pub mod log;
pub mod timer;

pub use err::{Error, Result};
pub use hard::HardTimer;
pub use timer::{Callback, SoftTimers, TimerHandle};
pub use util::sync;
