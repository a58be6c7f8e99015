//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS failure, ...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Outbound call exceeded the configured timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The gateway answered with a redirect that carries no usable Location
    #[error("malformed redirect: status {status} without a usable Location header")]
    MalformedRedirect { status: u16 },

    /// A gateway or redirect URL could not be parsed
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Terminal non-2xx response from the gateway
    #[error("gateway returned {status}: {body}")]
    Gateway { status: u16, body: String },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            ClientError::Http(err)
        }
    }
}

impl ClientError {
    /// Whether the failure happened before a terminal gateway answer was read
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout { .. } | Self::MalformedRedirect { .. }
        )
    }

    /// Status and raw body of a gateway-reported failure
    pub fn gateway_response(&self) -> Option<(u16, &str)> {
        match self {
            Self::Gateway { status, body } => Some((*status, body.as_str())),
            _ => None,
        }
    }
}
