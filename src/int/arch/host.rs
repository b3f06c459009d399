// Hosted builds have no interrupts to mask. The expiry "interrupt" is just
// another thread, and the lock word alone provides the exclusion. Tests
// track a per-thread mask flag so masking can be checked.

cfg_if::cfg_if! {
    if #[cfg(test)] {
        use std::cell::Cell;

        std::thread_local! {
            static ENABLED: Cell<bool> = Cell::new(true);
        }

        pub fn cli() {
            ENABLED.with(|e| e.set(false));
        }

        pub fn sti() {
            ENABLED.with(|e| e.set(true));
        }

        pub fn interrupts_enabled() -> bool {
            ENABLED.with(Cell::get)
        }
    } else {
        #[inline(always)]
        pub fn cli() {}

        #[inline(always)]
        pub fn sti() {}

        #[inline(always)]
        pub fn interrupts_enabled() -> bool {
            false
        }
    }
}
