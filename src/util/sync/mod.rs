//! Synchronization utilities.

mod irq;
mod once_cell;

pub use irq::{IrqGuard, IrqLock};
pub use once_cell::OnceCell;
