//! Tolerant holiday CSV reader.
//!
//! Holiday files are loosely formatted: blank lines, `#` / `//` comments
//! (whole-line or inline), and comma / tab / semicolon separated tokens.
//! Every token that decodes to a valid civil date is taken; everything
//! else is skipped.

use chrono::NaiveDate;
use gtb_core::{Error, Result};
use gtb_time::HolidaySet;
use std::fs;
use std::path::Path;

/// Load a holiday set from a CSV file.
///
/// Returns an error only when the file cannot be read; a file with no
/// valid dates yields an empty set, which the caller may warn about.
pub fn load_holiday_file(path: &Path) -> Result<HolidaySet> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::Holiday(format!("{}: {e}", path.display())))?;
    let set = parse_holiday_text(&raw)?;
    tracing::debug!(path = %path.display(), holidays = set.len(), "loaded holiday file");
    Ok(set)
}

/// Parse holiday CSV content into a set of dates.
pub fn parse_holiday_text(raw: &str) -> Result<HolidaySet> {
    let mut cleaned = String::with_capacity(raw.len());
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let line = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        cleaned.push_str(&line.replace(['\t', ';'], ","));
        cleaned.push('\n');
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(cleaned.as_bytes());

    let mut set = HolidaySet::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Holiday(format!("csv parse: {e}")))?;
        for field in record.iter() {
            if let Some(date) = parse_holiday_token(field) {
                set.insert(date);
            }
        }
    }
    Ok(set)
}

/// Decode one token as a date: separators `-` `/` `.` are stripped, the
/// remainder must be exactly 8 digits, the year above 1900, and the whole
/// a valid civil date.
fn parse_holiday_token(token: &str) -> Option<NaiveDate> {
    let digits: String = token
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '/' | '.'))
        .collect();
    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = digits[0..4].parse().ok()?;
    let month: u32 = digits[4..6].parse().ok()?;
    let day: u32 = digits[6..8].parse().ok()?;
    if year <= 1900 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
