//! Pre-notification window.
//!
//! Notification for an effective settlement day F is allowed inside the
//! inclusive interval [F−1 @ 10:00 JST, F @ 09:55 JST].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use gtb_core::{Error, Result};

use crate::clock::at_jst;

/// The pre-notification window, anchored to an effective settlement day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyWindow {
    /// Opening time on the day before the fixing day.
    pub prev_day_start: NaiveTime,
    /// Closing time on the fixing day itself.
    pub fixing_end: NaiveTime,
}

impl Default for NotifyWindow {
    fn default() -> Self {
        Self {
            prev_day_start: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
            fixing_end: NaiveTime::from_hms_opt(9, 55, 0).expect("valid time"),
        }
    }
}

impl NotifyWindow {
    /// Return `true` if `now` falls inside the window for `fixing_date`,
    /// both bounds inclusive.
    pub fn contains(&self, now: DateTime<FixedOffset>, fixing_date: NaiveDate) -> Result<bool> {
        let prev = fixing_date
            .pred_opt()
            .ok_or_else(|| Error::Date(format!("no day before {fixing_date}")))?;
        let start = at_jst(prev, self.prev_day_start);
        let end = at_jst(fixing_date, self.fixing_end);
        Ok(start <= now && now <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jst_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        at_jst(date(y, m, d), NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn boundaries_are_inclusive() {
        let window = NotifyWindow::default();
        let fixing = date(2026, 1, 9);
        assert!(window.contains(jst_hm(2026, 1, 8, 10, 0), fixing).unwrap());
        assert!(!window.contains(jst_hm(2026, 1, 8, 9, 59), fixing).unwrap());
        assert!(window.contains(jst_hm(2026, 1, 9, 9, 55), fixing).unwrap());
        assert!(!window.contains(jst_hm(2026, 1, 9, 9, 56), fixing).unwrap());
    }

    #[test]
    fn interior_and_exterior() {
        let window = NotifyWindow::default();
        let fixing = date(2026, 1, 9);
        assert!(window.contains(jst_hm(2026, 1, 8, 23, 30), fixing).unwrap());
        assert!(window.contains(jst_hm(2026, 1, 9, 0, 0), fixing).unwrap());
        assert!(!window.contains(jst_hm(2026, 1, 7, 12, 0), fixing).unwrap());
        assert!(!window.contains(jst_hm(2026, 1, 9, 12, 0), fixing).unwrap());
    }

    #[test]
    fn non_jst_offsets_compare_as_instants() {
        let window = NotifyWindow::default();
        let fixing = date(2026, 1, 9);
        // 01:00 UTC on Jan 8 = 10:00 JST on Jan 8, exactly the open bound.
        let utc_now = DateTime::parse_from_rfc3339("2026-01-08T01:00:00+00:00").unwrap();
        assert!(window.contains(utc_now, fixing).unwrap());
    }
}
