//! One sequential run: load → decide → dispatch → persist.

use anyhow::{Context, Result};
use tracing::{info, warn};

use gtb_notify::{
    build_message, decide, load_holiday_file, notify_local, now_jst, parse_now_override,
    NotificationState, NotifyWindow, NtfyClient,
};
use gtb_time::{day_key, GotobiCalendar, GotobiPolicy, HolidaySet};

use crate::cli::{Cli, NotifyMode};

/// Load a holiday set, degrading to an empty set when the file is absent
/// or holds no valid dates. Skipped entirely when the policy ignores the
/// calendar.
fn load_or_empty(path: &std::path::Path, enabled: bool) -> HolidaySet {
    if !enabled {
        return HolidaySet::new();
    }
    match load_holiday_file(path) {
        Ok(set) => {
            if set.is_empty() {
                warn!(path = %path.display(), "holiday file has no valid dates");
            }
            set
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "holiday file unavailable, using empty set");
            HolidaySet::new()
        }
    }
}

/// Execute a single notifier pass.
pub fn run(cli: &Cli) -> Result<()> {
    let now = match &cli.now {
        Some(raw) => parse_now_override(raw).context("invalid --now value")?,
        None => now_jst(),
    };

    let policy = GotobiPolicy {
        enforce_window: !cli.no_window,
        ..GotobiPolicy::default()
    };
    let domestic = load_or_empty(&cli.holiday_jp, policy.use_domestic_holidays);
    let foreign = load_or_empty(&cli.holiday_us, policy.use_foreign_holidays);
    let calendar = GotobiCalendar::new(policy, domestic, foreign);
    let window = NotifyWindow::default();

    let state = NotificationState::load(&cli.state_file);
    let decision = decide(now, &calendar, &window, &state)?;

    let (Some(day), Some(base_day)) = (decision.day, decision.base_day) else {
        info!(%now, reason = %decision.reason, "no notification");
        return Ok(());
    };
    if !decision.notify {
        info!(%now, %day, reason = %decision.reason, "no notification");
        return Ok(());
    }

    let message = build_message(now, day, base_day);
    info!(%day, base_day, alert = %message, "notifying");

    match cli.notify_mode {
        NotifyMode::Local => {
            if !notify_local(&cli.ntfy_title, &message) {
                warn!("local notification unavailable, message logged only");
            }
        }
        NotifyMode::Ntfy => {
            if cli.ntfy_disabled() {
                info!("ntfy send disabled, skipping");
            } else {
                let client = NtfyClient::new(
                    &cli.ntfy_server,
                    &cli.ntfy_topic,
                    &cli.ntfy_title,
                    &cli.ntfy_priority,
                )?;
                client.publish(&message).context("ntfy publish failed")?;
                info!(url = %client.url(), "published");
            }
        }
    }

    if cli.state_disabled() {
        info!("state update disabled, skipping");
        return Ok(());
    }
    let mut state = state;
    state.record_notification(day_key(day), now, cli.notify_mode.as_str());
    if cli.notify_mode == NotifyMode::Ntfy {
        state.ntfy_server = Some(cli.ntfy_server.clone());
        state.ntfy_topic = Some(cli.ntfy_topic.clone());
    }
    state.save(&cli.state_file)?;
    info!(path = %cli.state_file.display(), "state updated");
    Ok(())
}
