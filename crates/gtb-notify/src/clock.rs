//! JST clock handling.
//!
//! Every decision runs against a timestamp normalized to JST (UTC+9, no
//! daylight saving), produced either from the real clock or from an
//! explicit override string.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use gtb_core::{Error, Result};

/// The fixed JST offset (UTC+9).
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("+09:00 is a valid offset")
}

/// The current instant, converted to JST regardless of host timezone.
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

/// Attach the JST offset to a civil date + time.
///
/// A fixed offset maps every local datetime to exactly one instant, so
/// this cannot be ambiguous.
pub fn at_jst(date: NaiveDate, time: NaiveTime) -> DateTime<FixedOffset> {
    jst()
        .from_local_datetime(&date.and_time(time))
        .single()
        .expect("fixed offsets have a single local mapping")
}

/// Parse an explicit "now" override into a JST timestamp.
///
/// Accepted forms (seconds optional, single-digit hours tolerated):
/// - `2026-01-02 12:34`, `2026-01-02T12:34:56`
/// - `2026-01-02T12:34:56+09:00`, trailing `Z` for UTC
/// - `20260102T1234`, `202601021234`
/// - `20260109 4:30`
///
/// Inputs without an offset are taken as JST; inputs with one are
/// converted to JST.
pub fn parse_now_override(raw: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Date("empty now override".into()));
    }
    // chrono's %z does not take a bare Zulu suffix outside RFC 3339.
    let s = match trimmed.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => trimmed.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&jst()));
    }

    const WITH_OFFSET: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M%z",
        "%Y-%m-%d %H:%M:%S%z",
        "%Y-%m-%d %H:%M%z",
        "%Y%m%dT%H:%M:%S%z",
        "%Y%m%dT%H:%M%z",
    ];
    for fmt in WITH_OFFSET {
        if let Ok(dt) = DateTime::parse_from_str(&s, fmt) {
            return Ok(dt.with_timezone(&jst()));
        }
    }

    const NAIVE: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y%m%dT%H:%M:%S",
        "%Y%m%dT%H:%M",
        "%Y%m%d %H:%M",
        "%Y%m%dT%H%M",
        "%Y%m%d%H%M",
    ];
    for fmt in NAIVE {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&s, fmt) {
            return jst()
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| Error::Date(format!("ambiguous local time: {raw}")));
        }
    }

    Err(Error::Date(format!("unrecognised now override: {raw}")))
}
