//! Command-line surface.
//!
//! Every option mirrors an environment variable so the tool drops into a
//! cron line without flags.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Notification transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifyMode {
    /// Publish to an ntfy topic (default).
    Ntfy,
    /// Show an OS-local notification.
    Local,
}

impl NotifyMode {
    /// Name recorded in the state file.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyMode::Ntfy => "ntfy",
            NotifyMode::Local => "local",
        }
    }
}

/// Gotobi settlement-day fixing notifier.
#[derive(Debug, Parser)]
#[command(name = "gotobi", version, about)]
pub struct Cli {
    /// Domestic (Japanese) holiday CSV path.
    #[arg(long = "jp", env = "GOTOBI_HOLIDAY_JP", default_value = "jp_holidays.csv")]
    pub holiday_jp: PathBuf,

    /// Foreign (US bank) holiday CSV path.
    #[arg(
        long = "us",
        env = "GOTOBI_HOLIDAY_US",
        default_value = "fed_bank_holidays.csv"
    )]
    pub holiday_us: PathBuf,

    /// State file recording the last notified day.
    #[arg(
        long = "state",
        env = "GOTOBI_STATE",
        default_value = "gotobi-fixing.state.json"
    )]
    pub state_file: PathBuf,

    /// ntfy server.
    #[arg(long, env = "NTFY_SERVER", default_value = "https://ntfy.sh")]
    pub ntfy_server: String,

    /// ntfy topic (pick one unlikely to collide with other users).
    #[arg(long, env = "NTFY_TOPIC", default_value = "gotobi-fixing")]
    pub ntfy_topic: String,

    /// Notification title.
    #[arg(long, env = "NTFY_TITLE", default_value = "gotobi-fixing")]
    pub ntfy_title: String,

    /// Notification priority.
    #[arg(long, env = "NTFY_PRIORITY", default_value = "default")]
    pub ntfy_priority: String,

    /// Notification transport.
    #[arg(
        long = "notify",
        value_enum,
        env = "GOTOBI_NOTIFY_MODE",
        default_value = "ntfy"
    )]
    pub notify_mode: NotifyMode,

    /// Disable the pre-notification window filter.
    #[arg(long = "no-window")]
    pub no_window: bool,

    /// Decide against this JST time instead of the real clock
    /// (e.g. "2026-01-02 12:34" or "2026-01-02T12:34:56+09:00").
    #[arg(long)]
    pub now: Option<String>,

    /// Skip the ntfy send.
    #[arg(long = "no-ntfy")]
    pub no_ntfy: bool,

    /// Skip the state update.
    #[arg(long = "no-state")]
    pub no_state: bool,

    /// Shorthand for --no-ntfy --no-state.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Cli {
    /// Whether the ntfy send is suppressed.
    pub fn ntfy_disabled(&self) -> bool {
        self.no_ntfy || self.dry_run
    }

    /// Whether the state update is suppressed.
    pub fn state_disabled(&self) -> bool {
        self.no_state || self.dry_run
    }
}
