//! # Interrupt masking
//!
//! Foreground code and the expiry interrupt share the timer pool. Everything
//! that touches it runs with interrupts masked, see
//! [`IrqLock`](crate::sync::IrqLock).

mod arch;

pub use arch::interrupts_enabled as enabled;
use arch::{cli, sti};

/// Disable interrupts and return whether they were previously enabled.
pub fn disable() -> bool {
    let ret = enabled();
    cli();
    ret
}

/// Enable interrupts and return whether they were previously enabled.
pub fn enable() -> bool {
    let ret = enabled();
    sti();
    ret
}
