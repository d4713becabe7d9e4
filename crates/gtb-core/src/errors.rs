//! Error types for gotobi-rs.
//!
//! One `thiserror`-derived enum covers the whole workspace. Only the
//! [`Error::Configuration`] variant is fatal in the sense of the decision
//! core: it aborts a run without producing a decision. Everything else is
//! a collaborator failure that the caller reports and degrades from.

use thiserror::Error;

/// The top-level error type used throughout gotobi-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Fatal configuration error: the rollback walk exhausted its bound,
    /// a month clamp produced an impossible date, or the policy is
    /// malformed. No decision is produced.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Date-related error (invalid civil date, out-of-range key).
    #[error("date error: {0}")]
    Date(String),

    /// Holiday-file error (unreadable file, malformed content).
    #[error("holiday data error: {0}")]
    Holiday(String),

    /// State-file error (only raised on write; reads degrade to default).
    #[error("state error: {0}")]
    State(String),

    /// Notification transport failure (single attempt, no retry).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Shorthand `Result` type used throughout gotobi-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gtb_core::ensure;
/// fn bounded(n: u32) -> gtb_core::Result<u32> {
///     ensure!(n <= 31, "day {n} out of range");
///     Ok(n)
/// }
/// assert!(bounded(5).is_ok());
/// assert!(bounded(40).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Configuration(...))` immediately.
///
/// # Example
/// ```
/// use gtb_core::fail;
/// fn always_err() -> gtb_core::Result<()> {
///     fail!("unreachable policy combination");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Configuration(format!($($msg)*)))
    };
}
