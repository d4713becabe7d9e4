//! Alert message composition.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

use crate::clock::at_jst;

/// Compose the human-readable alert for an effective settlement day.
///
/// Mentions the fixing date, the nominal (base) day that produced it, and
/// the remaining time until the 09:55 JST fix, clamped at zero.
pub fn build_message(
    now: DateTime<FixedOffset>,
    fixing_date: NaiveDate,
    base_day: u32,
) -> String {
    let fix = at_jst(
        fixing_date,
        NaiveTime::from_hms_opt(9, 55, 0).expect("valid time"),
    );
    let remaining_minutes = (fix - now).num_minutes().max(0);
    let (hours, minutes) = (remaining_minutes / 60, remaining_minutes % 60);
    format!(
        "Gotobi fixing alert: JST {} (base day {base_day}), {hours}h{minutes:02}m until the 09:55 fix.",
        fixing_date.format("%Y/%m/%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_down_across_the_previous_day() {
        let now = at_jst(date(2026, 1, 8), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        let msg = build_message(now, date(2026, 1, 9), 10);
        assert_eq!(
            msg,
            "Gotobi fixing alert: JST 2026/01/09 (base day 10), 23h55m until the 09:55 fix."
        );
    }

    #[test]
    fn clamps_at_zero_after_the_fix() {
        let now = at_jst(date(2026, 1, 9), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        let msg = build_message(now, date(2026, 1, 9), 10);
        assert!(msg.contains("0h00m"), "{msg}");
    }
}
