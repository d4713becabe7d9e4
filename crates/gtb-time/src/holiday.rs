//! `HolidaySet` — an opaque set of holiday dates.
//!
//! One set per source calendar (domestic, foreign). Immutable once loaded
//! for a run; parsing is the loader's concern, not this type's.

use chrono::NaiveDate;
use std::collections::HashSet;

/// A set of designated holiday dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    /// Create an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any collection of dates.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Add a holiday.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Return `true` if `date` is a member of this set.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of holidays in the set.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the set holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::from_dates(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = HolidaySet::new();
        assert!(set.is_empty());
        assert!(!set.contains(date(2026, 1, 1)));
    }

    #[test]
    fn membership() {
        let set: HolidaySet = [date(2026, 1, 12), date(2026, 2, 11)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(date(2026, 1, 12)));
        assert!(!set.contains(date(2026, 1, 13)));
    }
}
