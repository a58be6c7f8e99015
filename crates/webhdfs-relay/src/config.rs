//! Relay configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use webhdfs_client::ClientConfig;

/// Relay server configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// WebHDFS base URL (e.g. `http://namenode:9870/webhdfs/v1`)
    pub webhdfs_url: String,
    /// HDFS user sent as `user.name`
    pub hdfs_user: String,
    /// Directory every relayed path is placed under
    pub upload_root: String,
    /// Timeout for each outbound WebHDFS call (seconds)
    pub request_timeout_secs: u64,
    /// Maximum request body size (bytes)
    pub max_body_size: usize,
    /// Enable CORS
    pub cors_enabled: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            webhdfs_url: "http://localhost:9870/webhdfs/v1".to_string(),
            hdfs_user: "hadoop".to_string(),
            upload_root: "/01".to_string(),
            request_timeout_secs: 30,
            max_body_size: 16 * 1024 * 1024, // 16 MB
            cors_enabled: true,
        }
    }
}

impl RelayConfig {
    /// Get the bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configuration for the outbound WebHDFS client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.webhdfs_url)
            .with_user(&self.hdfs_user)
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}
