//! Client configuration.

use std::time::Duration;

use gamelist_core::ApiUrl;

/// Dispatch timeout applied to every request, including refresh calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin (plus path prefix) that every endpoint is resolved against.
    pub base_url: ApiUrl,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("gamelist/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
