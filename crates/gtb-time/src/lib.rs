//! # gtb-time
//!
//! Business-day calendar, holiday sets, and the settlement-day resolver.
//!
//! A *gotobi* (五十日) nominal settlement day is one of the calendar-rule
//! candidates (5/10/15/20/25/30/31/last-of-February). The *effective*
//! settlement day is the nearest business day on or before the nominal
//! date, where weekends, two independent holiday calendars, and the fixed
//! year-end closure (Dec 31 – Jan 3) are non-business.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BusinessCalendar` trait and the policy-driven gotobi calendar.
pub mod calendar;

/// Civil-date helpers and the YYYYMMDD day-key codec.
pub mod dates;

/// `HolidaySet` — an opaque set of holiday dates.
pub mod holiday;

/// `GotobiPolicy` — the immutable behaviour switches.
pub mod policy;

/// Nominal candidate generation, rollback, and reverse lookup.
pub mod settlement;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{is_yearend_closure, BusinessCalendar, GotobiCalendar};
pub use dates::{date_from_key, day_key, days_in_month, last_day_of_month};
pub use holiday::HolidaySet;
pub use policy::GotobiPolicy;
pub use settlement::{
    is_settlement_day, nominal_candidates, roll_back, settlement_base_for, MAX_ROLLBACK_DAYS,
};
