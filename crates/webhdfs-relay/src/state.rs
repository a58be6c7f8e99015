//! Application state

use crate::config::RelayConfig;
use crate::translator::RequestTranslator;
use std::sync::Arc;
use tracing::info;
use webhdfs_client::{FileGateway, WebHdfsClient};

/// Application state shared across handlers. Immutable after startup.
pub struct AppState {
    /// Relay configuration
    pub config: RelayConfig,
    /// Path translator in front of the WebHDFS client
    pub translator: RequestTranslator,
}

impl AppState {
    /// Create state backed by a real WebHDFS client
    pub fn new(config: RelayConfig) -> anyhow::Result<Self> {
        let client = WebHdfsClient::new(config.client_config())?;
        info!(
            "WebHDFS gateway: {} (user: {}, upload root: {})",
            client.config().base_url(),
            client.config().user_name,
            config.upload_root
        );
        Ok(Self::with_gateway(config, Arc::new(client)))
    }

    /// Create state with any gateway implementation
    pub fn with_gateway(config: RelayConfig, gateway: Arc<dyn FileGateway>) -> Self {
        let translator = RequestTranslator::new(config.upload_root.clone(), gateway);
        Self { config, translator }
    }
}
