//! Cortex-M interrupt masking through `PRIMASK`.

use core::arch::asm;

/// Disable interrupts.
#[inline(always)]
pub fn cli() {
    unsafe { asm!("cpsid i", options(nostack, preserves_flags)) }
}

/// Enable interrupts.
#[inline(always)]
pub fn sti() {
    unsafe { asm!("cpsie i", options(nostack, preserves_flags)) }
}

/// Check whether interrupts are currently enabled.
#[inline(always)]
pub fn interrupts_enabled() -> bool {
    let primask: u32;
    unsafe { asm!("mrs {}, PRIMASK", out(reg) primask, options(nomem, nostack, preserves_flags)) };

    primask & 1 == 0
}
