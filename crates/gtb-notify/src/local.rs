//! Best-effort OS-local notification.
//!
//! Tries the platform notifiers in order and reports whether any of them
//! accepted the message; the caller falls back to plain logging when none
//! did.

use std::process::{Command, Stdio};

/// Show a local notification, trying `termux-notification` (Android),
/// `notify-send` (Linux desktops), then `osascript` on macOS.
pub fn notify_local(title: &str, message: &str) -> bool {
    if run_silent(
        "termux-notification",
        &["--title", title, "--content", message],
    ) {
        return true;
    }
    if run_silent("notify-send", &[title, message]) {
        return true;
    }
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape_applescript(message),
            escape_applescript(title)
        );
        if run_silent("osascript", &["-e", &script]) {
            return true;
        }
    }
    false
}

/// Run a command with suppressed output; an absent binary or a non-zero
/// exit both count as "not delivered".
fn run_silent(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Escape backslashes and double quotes for an AppleScript string literal.
#[cfg(target_os = "macos")]
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_binary_is_not_delivered() {
        assert!(!run_silent("gotobi-no-such-notifier", &["x"]));
    }

    #[cfg(unix)]
    #[test]
    fn successful_command_counts_as_delivered() {
        assert!(run_silent("true", &[]));
        assert!(!run_silent("false", &[]));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn applescript_escaping() {
        assert_eq!(escape_applescript(r#"a "b" \c"#), r#"a \"b\" \\c"#);
    }
}
