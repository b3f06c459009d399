//! A single software timer record.

use super::{Callback, TimerHandle};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum SlotState {
    /// Not handed out.
    Free,
    /// Handed out, not counting.
    Stopped,
    /// Counting down. The timer expires `countdown_ms + 1` milliseconds out.
    Running { countdown_ms: u32 },
}

#[derive(Copy, Clone)]
pub(super) struct Slot {
    pub state: SlotState,
    /// Bumped on destroy so stale handles stop matching.
    pub generation: u32,
    /// Configured period. Zero until the timer is first configured.
    pub reload_ms: u32,
    pub repeat: bool,
    pub callback: Option<Callback>,
}

impl Slot {
    pub const FREE: Slot = Slot {
        state: SlotState::Free,
        generation: 0,
        reload_ms: 0,
        repeat: false,
        callback: None,
    };

    pub fn countdown_ms(&self) -> Option<u32> {
        match self.state {
            SlotState::Running { countdown_ms } => Some(countdown_ms),
            _ => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.reload_ms != 0
    }

    /// Begin counting a full period. The interval the hardware is about to
    /// count is inclusive, hence one less than the period.
    pub fn start(&mut self) {
        self.state = SlotState::Running {
            countdown_ms: self.reload_ms - 1,
        };
    }

    pub fn stop(&mut self) {
        self.state = SlotState::Stopped;
        self.repeat = false;
    }

    /// Return the slot to the pool, dropping its configuration.
    pub fn release(&mut self) {
        *self = Slot {
            generation: self.generation.wrapping_add(1),
            ..Slot::FREE
        };
    }

    /// Advance the countdown by `step_ms`, firing the callback if that
    /// expires the timer.
    pub fn step(&mut self, handle: TimerHandle, step_ms: u32) {
        let countdown_ms = match self.state {
            SlotState::Running { countdown_ms } => countdown_ms,
            _ => return,
        };

        // A countdown of `c` expires `c + 1` milliseconds out, so only a step
        // past the countdown expires the timer. Zero-length steps never do,
        // and an overshooting step still expires it only once.
        if step_ms <= countdown_ms {
            self.state = SlotState::Running {
                countdown_ms: countdown_ms - step_ms,
            };
            return;
        }

        if let Some(callback) = self.callback {
            callback(handle);
        }

        if self.repeat {
            self.start();
        } else {
            self.stop();
        }
    }
}
