//! A simulated timer peripheral for running the pool off-target.

use super::HardTimer;

/// Behaves like a typical MCU up-counter with auto-reload: it counts
/// `0..=reload` and raises its update event on the following tick.
#[derive(Debug, Clone)]
pub struct FakeHardTimer {
    max_reload_ms: u32,
    reload_ms: u32,
    counter_ms: u32,
    running: bool,
    inits: usize,
}

impl FakeHardTimer {
    /// A stopped peripheral whose reload register holds at most
    /// `max_reload_ms`.
    pub fn new(max_reload_ms: u32) -> Self {
        Self {
            max_reload_ms,
            reload_ms: 0,
            counter_ms: 0,
            running: false,
            inits: 0,
        }
    }

    /// Let one millisecond pass. Returns whether the expiry interrupt fired.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        if self.counter_ms >= self.reload_ms {
            self.counter_ms = 0;
            true
        } else {
            self.counter_ms += 1;
            false
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How many times [`HardTimer::init`] was called.
    pub fn inits(&self) -> usize {
        self.inits
    }
}

impl HardTimer for FakeHardTimer {
    fn init(&mut self, max_reload_ms: u32) {
        self.inits += 1;
        self.reload_ms = max_reload_ms.min(self.max_reload_ms);
        self.counter_ms = 0;
        self.running = false;
    }

    fn start(&mut self) {
        self.counter_ms = 0;
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
        self.counter_ms = 0;
    }

    fn counter(&self) -> u32 {
        self.counter_ms
    }

    fn set_reload(&mut self, reload_ms: u32) {
        self.reload_ms = reload_ms.min(self.max_reload_ms);
    }

    fn reload(&self) -> u32 {
        self.reload_ms
    }
}
