//! Common types for the WebHDFS client

use async_trait::async_trait;
use std::fmt;

use crate::Result;

/// WebHDFS operations issued by this client
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatewayOp {
    Create,
    Delete,
    ListStatus,
}

impl GatewayOp {
    /// Value of the `op` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::ListStatus => "LISTSTATUS",
        }
    }
}

impl fmt::Display for GatewayOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful gateway answer. The body is passed through verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayResponse {
    /// HTTP status of the terminal response
    pub status: u16,
    /// Raw response body (JSON or plain text, never parsed)
    pub body: String,
}

impl GatewayResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// File operations against a remote filesystem gateway
#[async_trait]
pub trait FileGateway: Send + Sync {
    /// Create (or overwrite) a file with the given content
    async fn create(&self, path: &str, content: &str) -> Result<GatewayResponse>;

    /// Delete a file or directory
    async fn delete(&self, path: &str) -> Result<GatewayResponse>;

    /// List the direct children of a directory
    async fn list(&self, path: &str) -> Result<GatewayResponse>;
}
