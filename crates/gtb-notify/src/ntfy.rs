//! ntfy pub/sub transport.
//!
//! One plain-text POST to `{server}/{topic}` with the documented `Title`
//! and `Priority` headers. Single attempt; the outcome gates the state
//! write, and retrying is the scheduler's job, not ours.

use gtb_core::{Error, Result};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A configured ntfy publisher.
#[derive(Debug)]
pub struct NtfyClient {
    server: String,
    topic: String,
    title: String,
    priority: String,
    http: reqwest::blocking::Client,
}

impl NtfyClient {
    /// Build a client. Trailing slashes on the server and leading slashes
    /// on the topic are normalized away.
    pub fn new(server: &str, topic: &str, title: &str, priority: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Transport(format!("build http client: {e}")))?;
        Ok(Self {
            server: server.trim_end_matches('/').to_string(),
            topic: topic.trim().trim_start_matches('/').to_string(),
            title: title.to_string(),
            priority: priority.to_string(),
            http,
        })
    }

    /// The URL messages are published to.
    pub fn url(&self) -> String {
        format!("{}/{}", self.server, self.topic)
    }

    /// Publish one message. Non-2xx responses are transport errors.
    pub fn publish(&self, message: &str) -> Result<()> {
        let url = self.url();
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .header("Title", &self.title)
            .header("Priority", &self.priority)
            .body(message.to_string())
            .send()
            .map_err(|e| Error::Transport(format!("POST {url}: {e}")))?;
        response
            .error_for_status()
            .map_err(|e| Error::Transport(format!("POST {url}: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_normalization() {
        let client = NtfyClient::new("https://ntfy.sh/", "/my-topic ", "t", "default").unwrap();
        assert_eq!(client.url(), "https://ntfy.sh/my-topic");

        let client = NtfyClient::new("https://ntfy.example", "topic", "t", "high").unwrap();
        assert_eq!(client.url(), "https://ntfy.example/topic");
    }
}
