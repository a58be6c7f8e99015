//! Uniform JSON envelope returned by every file endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `{ "statusCode": .., "message": .., "data": .. }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn of(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    /// 200 envelope
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::of(StatusCode::OK, message, data)
    }
}

impl<T: Serialize> IntoResponse for ResponseEnvelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
