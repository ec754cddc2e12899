//! Client Configuration

use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Auth API base URL, without the `/api` prefix
    pub server_url: String,
    pub request_timeout: Duration,
    /// Delay before "Login successfully!" is shown; zero shows it inline
    pub success_notice_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            success_notice_delay: Duration::from_secs(2),
        }
    }
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    pub fn with_success_notice_delay(mut self, delay: Duration) -> Self {
        self.success_notice_delay = delay;
        self
    }
}
