//! `GotobiPolicy` — the fixed behaviour switches.
//!
//! Set once at startup and passed by reference into every component; there
//! is no mutable global configuration.

use serde::{Deserialize, Serialize};

/// Immutable behaviour switches for candidate generation, the business-day
/// calendar, and the notification window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotobiPolicy {
    /// Include the 31st as a nominal candidate in 31-day months.
    pub include_day31: bool,
    /// Include the last day of February (28/29) as a nominal candidate.
    pub include_feb_last_day: bool,
    /// Treat the closed range Dec 31 – Jan 3 as non-business.
    pub exclude_yearend_closure: bool,
    /// Honour the domestic holiday set.
    pub use_domestic_holidays: bool,
    /// Honour the foreign holiday set.
    pub use_foreign_holidays: bool,
    /// Suppress notification outside the pre-notification window.
    pub enforce_window: bool,
}

impl Default for GotobiPolicy {
    fn default() -> Self {
        Self {
            include_day31: true,
            include_feb_last_day: true,
            exclude_yearend_closure: true,
            use_domestic_holidays: true,
            use_foreign_holidays: true,
            enforce_window: true,
        }
    }
}
