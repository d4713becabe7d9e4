//! # gtb-notify
//!
//! The decision layer of the gotobi notifier: JST clock handling, the
//! pre-notification window, persisted dedup state, the `decide` entry
//! point, and the collaborators the decision feeds: holiday CSV loading,
//! the ntfy pub/sub transport, OS-local notification, and message
//! composition.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// JST normalization and the `--now` override parser.
pub mod clock;

/// `decide` — the window & dedup decider.
pub mod decision;

/// Tolerant holiday CSV reader.
pub mod holidays;

/// Best-effort OS-local notification.
pub mod local;

/// Alert message composition.
pub mod message;

/// ntfy pub/sub transport.
pub mod ntfy;

/// Persisted notification state.
pub mod state;

/// Pre-notification window.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{at_jst, jst, now_jst, parse_now_override};
pub use decision::{decide, Decision, Reason};
pub use holidays::load_holiday_file;
pub use local::notify_local;
pub use message::build_message;
pub use ntfy::NtfyClient;
pub use state::NotificationState;
pub use window::NotifyWindow;
