//! Client configuration

use std::time::Duration;

/// Client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// WebHDFS base URL, including the `/webhdfs/v1` prefix
    pub gateway_url: String,
    /// Value sent as the `user.name` query parameter
    pub user_name: String,
    /// Per-request timeout for every outbound call
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:9870/webhdfs/v1".to_string(),
            user_name: "hadoop".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("webhdfs-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config with the given gateway URL
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            ..Default::default()
        }
    }

    /// Set the HDFS user name
    pub fn with_user(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with any trailing slash removed, so `{base}{path}` never
    /// produces a double slash.
    pub fn base_url(&self) -> &str {
        self.gateway_url.trim_end_matches('/')
    }
}
