// Global constants.

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("GIT_HASH"));

/// Default pool capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// Shortest period a timer may be configured with.
pub const MIN_RELOAD_MS: u32 = 2;

/// Upper clamp for the configured maximum reload. `u32::MAX` stays reserved
/// so that no legal reload can be mistaken for "no timeout".
pub const RELOAD_CEILING_MS: u32 = u32::MAX - 1;

/// Maximum reload of a 16-bit peripheral, the usual case.
pub const DEFAULT_MAX_RELOAD_MS: u32 = 0xFFFF;
