//! # Hardware timer adapter
//!
//! The pool drives exactly one physical timer through this trait. Register
//! programming, clock prescaling and vendor bindings live in the
//! implementation, not here.

#[cfg(any(test, feature = "fake"))]
mod fake;

#[cfg(any(test, feature = "fake"))]
pub use fake::FakeHardTimer;

/// A free-running up-counter with one millisecond resolution that raises an
/// interrupt when it passes its reload value.
///
/// Counting is inclusive: with a reload of `r` the counter runs through
/// `0..=r`, so the interrupt fires `r + 1` milliseconds after the counter was
/// (re)started, and a reload of zero fires after one millisecond. Software
/// timer countdowns are kept in the same units: a countdown of `c` is due in
/// `c + 1` milliseconds. The pool therefore advances by `reload + 1` on each
/// interrupt. Advancing by `reload` alone would leave every timer that did
/// not expire one millisecond behind per interrupt.
pub trait HardTimer {
    /// Configure the peripheral for one millisecond resolution and park the
    /// reload at `max_reload_ms`. Called once per pool.
    fn init(&mut self, max_reload_ms: u32);

    /// Reset the counter to zero and start counting, with the expiry
    /// interrupt enabled.
    fn start(&mut self);

    /// Stop counting and reset the counter to zero.
    fn stop(&mut self);

    /// Milliseconds counted since counting last (re)started.
    fn counter(&self) -> u32;

    /// Program the reload value. Values beyond what the peripheral can
    /// represent are silently capped.
    fn set_reload(&mut self, reload_ms: u32);

    /// The currently programmed reload value.
    fn reload(&self) -> u32;
}

#[cfg(test)]
mod test;
