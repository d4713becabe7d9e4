//! Persisted notification state.
//!
//! A single optional scalar (the YYYYMMDD key of the last effective day
//! already notified) plus bookkeeping fields. Read at run start, written
//! back only after a transport call reports success. A missing or corrupt
//! file degrades to the default state; dedup then simply does not
//! suppress on that run.

use chrono::{DateTime, FixedOffset};
use gtb_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The persisted dedup record. Field names match the state-file JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationState {
    /// Canonical YYYYMMDD key of the last notified effective day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notified_fixing_yyyymmdd: Option<u32>,

    /// JST timestamp of the last notification, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notified_at_jst: Option<String>,

    /// Transport used for the last notification (`ntfy` / `local`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_mode: Option<String>,

    /// ntfy server of the last notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntfy_server: Option<String>,

    /// ntfy topic of the last notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntfy_topic: Option<String>,

    /// Keys written by other versions of the tool, preserved on rewrite.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NotificationState {
    /// The last notified day key, if any.
    pub fn last_notified_day(&self) -> Option<u32> {
        self.last_notified_fixing_yyyymmdd
    }

    /// Record a successfully sent notification.
    pub fn record_notification(&mut self, fixing_key: u32, now: DateTime<FixedOffset>, mode: &str) {
        self.last_notified_fixing_yyyymmdd = Some(fixing_key);
        self.last_notified_at_jst = Some(now.to_rfc3339());
        self.notify_mode = Some(mode.to_string());
    }

    /// Load the state from `path`.
    ///
    /// A missing, unreadable, or corrupt file yields the default state;
    /// stale state only costs one possible duplicate notification, which
    /// is cheaper than failing a scheduled job.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no prior state, starting fresh");
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "corrupt state file, treating as absent");
                Self::default()
            }
        }
    }

    /// Write the state to `path` atomically (temp file + rename),
    /// creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::State(format!("create {}: {e}", parent.display())))?;
            }
        }
        let body = serde_json::to_string_pretty(self)
            .map_err(|e| Error::State(format!("serialize state: {e}")))?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);
        fs::write(&tmp, body).map_err(|e| Error::State(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, path)
            .map_err(|e| Error::State(format!("rename into {}: {e}", path.display())))?;
        Ok(())
    }
}
