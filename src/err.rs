//! Error types.

use core::fmt;

/// Reasons an operation on a software timer can be rejected. A rejected
/// operation never changes any state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Foreign, stale or out-of-range handle, or an out-of-range reload value.
    InvalidParameter,
    /// The timer is not in a state that permits the operation.
    InvalidState,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidParameter => write!(f, "invalid parameter"),
            Error::InvalidState => write!(f, "invalid state"),
        }
    }
}
