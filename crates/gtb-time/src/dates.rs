//! Civil-date helpers and the canonical YYYYMMDD day key.
//!
//! Effective settlement days are identified by their integer YYYYMMDD form
//! for persistence and comparison.

use chrono::{Datelike, NaiveDate};
use gtb_core::{Error, Result};

/// Return the canonical YYYYMMDD key for a date.
pub fn day_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Decode a YYYYMMDD key back into a date.
///
/// Returns `None` for keys that do not encode a valid civil date.
pub fn date_from_key(key: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt((key / 10_000) as i32, key / 100 % 100, key % 100)
}

/// Return the last calendar day of the given month, leap-year aware.
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| Error::Date(format!("no last day for {year}-{month:02}")))
}

/// Number of days in the given month (28–31).
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    Ok(last_day_of_month(year, month)?.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_roundtrip() {
        let d = date(2026, 1, 9);
        assert_eq!(day_key(d), 20260109);
        assert_eq!(date_from_key(20260109), Some(d));
    }

    #[test]
    fn invalid_keys_decode_to_none() {
        assert_eq!(date_from_key(20260230), None); // Feb 30
        assert_eq!(date_from_key(20261301), None); // month 13
        assert_eq!(date_from_key(0), None);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29); // leap
        assert_eq!(days_in_month(2026, 2).unwrap(), 28);
        assert_eq!(days_in_month(2100, 2).unwrap(), 28); // non-leap century
        assert_eq!(days_in_month(2000, 2).unwrap(), 29); // leap century
        assert_eq!(days_in_month(2026, 4).unwrap(), 30);
        assert_eq!(days_in_month(2026, 12).unwrap(), 31);
    }

    #[test]
    fn last_day_spans_year_boundary() {
        assert_eq!(last_day_of_month(2026, 12).unwrap(), date(2026, 12, 31));
    }
}
