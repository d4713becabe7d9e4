//! The window & dedup decider.
//!
//! Given a JST-normalized "now", decides whether today or tomorrow is an
//! effective settlement day, whether the moment falls inside the
//! pre-notification window, and whether that day was already notified.
//! State mutation is not part of `decide`; the caller persists only after
//! the transport reports success.

use chrono::{DateTime, FixedOffset, NaiveDate};
use gtb_core::{Error, Result};
use gtb_time::{day_key, settlement_base_for, GotobiCalendar};

use crate::state::NotificationState;
use crate::window::NotifyWindow;

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Neither today nor tomorrow is an effective settlement day.
    NotSettlementDay,
    /// A settlement day was found but now is outside its window.
    OutsideWindow,
    /// The settlement day was already notified.
    AlreadyNotified,
    /// Notification should be sent.
    Ok,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Reason::NotSettlementDay => "not a settlement day",
            Reason::OutsideWindow => "outside window",
            Reason::AlreadyNotified => "already notified",
            Reason::Ok => "ok",
        };
        write!(f, "{s}")
    }
}

/// The outcome of one decision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Whether a notification should be sent.
    pub notify: bool,
    /// The candidate effective settlement day, when one was found.
    pub day: Option<NaiveDate>,
    /// The nominal day-of-month that produced `day`.
    pub base_day: Option<u32>,
    /// Why.
    pub reason: Reason,
}

impl Decision {
    fn skip(reason: Reason, day: NaiveDate, base_day: u32) -> Self {
        Self {
            notify: false,
            day: Some(day),
            base_day: Some(base_day),
            reason,
        }
    }
}

/// Run one decision pass.
///
/// `now` must already be JST-normalized. Today is preferred over tomorrow
/// when both qualify (only possible with degenerate configurations).
pub fn decide(
    now: DateTime<FixedOffset>,
    calendar: &GotobiCalendar,
    window: &NotifyWindow,
    state: &NotificationState,
) -> Result<Decision> {
    let policy = calendar.policy();
    let today = now.date_naive();
    let tomorrow = today
        .succ_opt()
        .ok_or_else(|| Error::Date(format!("no day after {today}")))?;

    let candidate = match settlement_base_for(today, calendar, policy)? {
        Some(base) => Some((today, base)),
        None => settlement_base_for(tomorrow, calendar, policy)?.map(|base| (tomorrow, base)),
    };
    let Some((day, base_day)) = candidate else {
        return Ok(Decision {
            notify: false,
            day: None,
            base_day: None,
            reason: Reason::NotSettlementDay,
        });
    };

    if policy.enforce_window && !window.contains(now, day)? {
        return Ok(Decision::skip(Reason::OutsideWindow, day, base_day));
    }
    if state.last_notified_day() == Some(day_key(day)) {
        return Ok(Decision::skip(Reason::AlreadyNotified, day, base_day));
    }
    Ok(Decision {
        notify: true,
        day: Some(day),
        base_day: Some(base_day),
        reason: Reason::Ok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::at_jst;
    use chrono::NaiveTime;
    use gtb_time::{GotobiPolicy, HolidaySet};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jst_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        at_jst(date(y, m, d), NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    fn plain_calendar() -> GotobiCalendar {
        GotobiCalendar::new(
            GotobiPolicy::default(),
            HolidaySet::new(),
            HolidaySet::new(),
        )
    }

    #[test]
    fn tomorrow_is_the_candidate() {
        // 2026-01-10 is a Saturday; nominal 10 settles on Friday the 9th.
        let decision = decide(
            jst_hm(2026, 1, 8, 10, 0),
            &plain_calendar(),
            &NotifyWindow::default(),
            &NotificationState::default(),
        )
        .unwrap();
        assert!(decision.notify);
        assert_eq!(decision.day, Some(date(2026, 1, 9)));
        assert_eq!(decision.base_day, Some(10));
        assert_eq!(decision.reason, Reason::Ok);
        assert_eq!(decision.reason.to_string(), "ok");
    }

    #[test]
    fn no_settlement_day_in_sight() {
        let decision = decide(
            jst_hm(2026, 1, 6, 12, 0),
            &plain_calendar(),
            &NotifyWindow::default(),
            &NotificationState::default(),
        )
        .unwrap();
        assert!(!decision.notify);
        assert_eq!(decision.day, None);
        assert_eq!(decision.reason, Reason::NotSettlementDay);
        assert_eq!(decision.reason.to_string(), "not a settlement day");
    }

    #[test]
    fn outside_window_is_reported_with_the_day() {
        let decision = decide(
            jst_hm(2026, 1, 8, 9, 59),
            &plain_calendar(),
            &NotifyWindow::default(),
            &NotificationState::default(),
        )
        .unwrap();
        assert!(!decision.notify);
        assert_eq!(decision.day, Some(date(2026, 1, 9)));
        assert_eq!(decision.reason, Reason::OutsideWindow);
    }

    #[test]
    fn window_close_is_inclusive() {
        let cal = plain_calendar();
        let window = NotifyWindow::default();
        let state = NotificationState::default();
        let at_close = decide(jst_hm(2026, 1, 9, 9, 55), &cal, &window, &state).unwrap();
        assert!(at_close.notify);
        let past_close = decide(jst_hm(2026, 1, 9, 9, 56), &cal, &window, &state).unwrap();
        assert!(!past_close.notify);
        assert_eq!(past_close.reason, Reason::OutsideWindow);
    }

    #[test]
    fn dedup_suppresses_exact_match_only() {
        let mut state = NotificationState::default();
        state.last_notified_fixing_yyyymmdd = Some(20260109);
        let decision = decide(
            jst_hm(2026, 1, 8, 10, 0),
            &plain_calendar(),
            &NotifyWindow::default(),
            &state,
        )
        .unwrap();
        assert!(!decision.notify);
        assert_eq!(decision.reason, Reason::AlreadyNotified);
        assert_eq!(decision.reason.to_string(), "already notified");

        // An older (or manually reset) value does not suppress.
        state.last_notified_fixing_yyyymmdd = Some(20251225);
        let decision = decide(
            jst_hm(2026, 1, 8, 10, 0),
            &plain_calendar(),
            &NotifyWindow::default(),
            &state,
        )
        .unwrap();
        assert!(decision.notify);
    }

    #[test]
    fn window_can_be_disabled_by_policy() {
        let policy = GotobiPolicy {
            enforce_window: false,
            ..GotobiPolicy::default()
        };
        let cal = GotobiCalendar::new(policy, HolidaySet::new(), HolidaySet::new());
        let decision = decide(
            jst_hm(2026, 1, 8, 9, 59),
            &cal,
            &NotifyWindow::default(),
            &NotificationState::default(),
        )
        .unwrap();
        assert!(decision.notify);
        assert_eq!(decision.reason, Reason::Ok);
    }

    #[test]
    fn today_is_preferred_when_both_qualify() {
        // Jan 15 2026 (Thu) settles nominal 15. With Jan 19 and 20 as
        // holidays, nominal 20 walks Tue 20 → Mon 19 → Sun 18 → Sat 17 →
        // Fri 16, so Jan 16 settles nominal 20 and two effective days are
        // adjacent.
        let policy = GotobiPolicy {
            enforce_window: false,
            ..GotobiPolicy::default()
        };
        let domestic = HolidaySet::from_dates([date(2026, 1, 19), date(2026, 1, 20)]);
        let cal = GotobiCalendar::new(policy, domestic, HolidaySet::new());
        let decision = decide(
            jst_hm(2026, 1, 15, 12, 0),
            &cal,
            &NotifyWindow::default(),
            &NotificationState::default(),
        )
        .unwrap();
        assert_eq!(decision.day, Some(date(2026, 1, 15)));
        assert_eq!(decision.base_day, Some(15));
    }
}
