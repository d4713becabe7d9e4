//! Settlement-day resolver.
//!
//! Generates the nominal gotobi candidates for a month, rolls a nominal
//! date back to the nearest preceding business day, and answers the
//! reverse question: which nominal day does a given calendar date settle?

use chrono::{Datelike, NaiveDate};
use gtb_core::{ensure, fail, Error, Result};

use crate::calendar::BusinessCalendar;
use crate::dates::days_in_month;
use crate::policy::GotobiPolicy;

/// Upper bound on the backward walk. Weekends plus holiday clusters stay
/// well inside this; exhausting it means the holiday data blankets the
/// whole window and the run must abort.
pub const MAX_ROLLBACK_DAYS: u32 = 14;

/// Return the nominal settlement-day candidates for a month, strictly
/// ascending and deduplicated.
///
/// Always {5, 10, 15, 20, 25}; 30 in every month but February; 31 when
/// `include_day31` is set and the month has 31 days, except December
/// under the year-end closure, where Dec 31 is already forced
/// non-business and must not seed a rollback chain of its own; the last
/// day of February (28/29) when `include_feb_last_day` is set.
pub fn nominal_candidates(year: i32, month: u32, policy: &GotobiPolicy) -> Result<Vec<u32>> {
    ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
    let dim = days_in_month(year, month)?;

    let mut days: Vec<u32> = Vec::with_capacity(7);
    for d in [5, 10, 15, 20, 25, 30] {
        if d <= dim {
            days.push(d);
        }
    }
    if policy.include_day31 && dim >= 31 && !(policy.exclude_yearend_closure && month == 12) {
        days.push(31);
    }
    if policy.include_feb_last_day && month == 2 && !days.contains(&dim) {
        days.push(dim);
    }
    Ok(days)
}

/// Roll a nominal settlement day back to the nearest preceding business
/// day.
///
/// A nominal day beyond the month's actual length is first clamped to the
/// last real day of the month. The walk is bounded by
/// [`MAX_ROLLBACK_DAYS`]; exhausting the bound is a fatal configuration
/// error. On success the result is always a business day.
pub fn roll_back(
    year: i32,
    month: u32,
    nominal_day: u32,
    calendar: &dyn BusinessCalendar,
) -> Result<NaiveDate> {
    ensure!(nominal_day >= 1, "nominal day must be >= 1");
    let day = nominal_day.min(days_in_month(year, month)?);
    let start = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::Configuration(format!(
            "month clamp produced impossible date {year}-{month:02}-{day:02}"
        ))
    })?;

    let mut current = start;
    for _ in 0..=MAX_ROLLBACK_DAYS {
        if calendar.is_business_day(current) {
            return Ok(current);
        }
        current = current
            .pred_opt()
            .ok_or_else(|| Error::Date(format!("date underflow stepping back from {current}")))?;
    }
    fail!(
        "no business day within {MAX_ROLLBACK_DAYS} days before {start}; \
         the holiday data spans the entire window"
    )
}

/// Return the nominal day-of-month whose rollback lands exactly on
/// `date`, or `None` if `date` is not an effective settlement day.
///
/// Candidates are probed in ascending generation order and the first
/// rollback that lands on `date` claims it (smallest nominal day wins;
/// collisions are a configuration anomaly, not an error). For a date in
/// the first three days of January, the prior December's candidates are
/// probed as well, per the year-boundary clause of the reverse-lookup
/// contract.
pub fn settlement_base_for(
    date: NaiveDate,
    calendar: &dyn BusinessCalendar,
    policy: &GotobiPolicy,
) -> Result<Option<u32>> {
    if calendar.is_non_business_day(date) {
        return Ok(None);
    }
    for base in nominal_candidates(date.year(), date.month(), policy)? {
        if roll_back(date.year(), date.month(), base, calendar)? == date {
            return Ok(Some(base));
        }
    }
    if date.month() == 1 && date.day() <= 3 {
        let prior = date.year() - 1;
        for base in nominal_candidates(prior, 12, policy)? {
            if roll_back(prior, 12, base, calendar)? == date {
                return Ok(Some(base));
            }
        }
    }
    Ok(None)
}

/// Return `true` if `date` is itself an effective settlement day.
pub fn is_settlement_day(
    date: NaiveDate,
    calendar: &dyn BusinessCalendar,
    policy: &GotobiPolicy,
) -> Result<bool> {
    Ok(settlement_base_for(date, calendar, policy)?.is_some())
}
