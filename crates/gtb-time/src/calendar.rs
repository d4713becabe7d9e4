//! `BusinessCalendar` trait and the policy-driven gotobi calendar.
//!
//! A calendar knows which dates are business days. The gotobi calendar
//! combines weekends, the fixed year-end closure, and two independently
//! switchable holiday sets.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holiday::HolidaySet;
use crate::policy::GotobiPolicy;

/// A business-day calendar.
pub trait BusinessCalendar: std::fmt::Debug {
    /// Human-readable name (e.g. `"Gotobi (JP+US)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is a non-business day.
    fn is_non_business_day(&self, date: NaiveDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Return `true` if `date` is inside the year-end closure, the closed
/// range [Dec 31, Jan 3] spanning the year boundary.
pub fn is_yearend_closure(date: NaiveDate) -> bool {
    (date.month() == 12 && date.day() == 31) || (date.month() == 1 && date.day() <= 3)
}

/// The gotobi business-day calendar.
///
/// A date is non-business if **any** of the enabled conditions matches:
/// weekend, year-end closure, domestic holiday, foreign holiday. No other
/// business-day exceptions exist.
#[derive(Debug, Clone)]
pub struct GotobiCalendar {
    policy: GotobiPolicy,
    domestic: HolidaySet,
    foreign: HolidaySet,
}

impl GotobiCalendar {
    /// Create a calendar from a policy and the two holiday sets.
    ///
    /// An absent holiday file is represented by an empty set; the
    /// corresponding check then never matches.
    pub fn new(policy: GotobiPolicy, domestic: HolidaySet, foreign: HolidaySet) -> Self {
        Self {
            policy,
            domestic,
            foreign,
        }
    }

    /// The policy this calendar was built with.
    pub fn policy(&self) -> &GotobiPolicy {
        &self.policy
    }
}

impl BusinessCalendar for GotobiCalendar {
    fn name(&self) -> &str {
        "Gotobi"
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        if self.policy.exclude_yearend_closure && is_yearend_closure(date) {
            return false;
        }
        if self.policy.use_domestic_holidays && self.domestic.contains(date) {
            return false;
        }
        if self.policy.use_foreign_holidays && self.foreign.contains(date) {
            return false;
        }
        true
    }
}
