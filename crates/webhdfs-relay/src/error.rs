//! Error types and their mapping onto relay HTTP statuses

use crate::response::ResponseEnvelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;
use webhdfs_client::ClientError;

/// File operation exposed by the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Upload,
    Delete,
    List,
}

impl FileOperation {
    /// Envelope message on success
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Upload => "File uploaded successfully",
            Self::Delete => "File deleted successfully",
            Self::List => "Directory listed successfully",
        }
    }

    /// Envelope message on failure
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Upload => "File upload failed",
            Self::Delete => "File deletion failed",
            Self::List => "Failed to list directory",
        }
    }
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upload => "upload",
            Self::Delete => "delete",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

/// API error type
#[derive(Error, Debug)]
#[error("{operation} failed: {source}")]
pub struct ApiError {
    pub operation: FileOperation,
    #[source]
    pub source: ClientError,
}

impl ApiError {
    pub fn new(operation: FileOperation, source: ClientError) -> Self {
        Self { operation, source }
    }

    /// Relay status for this failure.
    ///
    /// Transport failures and malformed redirects are 500. A gateway 4xx is
    /// mirrored; any other gateway failure is 502.
    pub fn status_code(&self) -> StatusCode {
        match &self.source {
            ClientError::Gateway { status, .. } => match StatusCode::from_u16(*status) {
                Ok(code) if code.is_client_error() => code,
                _ => StatusCode::BAD_GATEWAY,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope `data`: the raw gateway body when the gateway answered,
    /// otherwise the error message.
    pub fn detail(&self) -> String {
        match self.source.gateway_response() {
            Some((_, body)) => body.to_string(),
            None => self.source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(
            operation = %self.operation,
            status = status.as_u16(),
            error = %self.source,
            "Relay operation failed"
        );

        ResponseEnvelope::of(status, self.operation.failure_message(), self.detail())
            .into_response()
    }
}
