//! Upload, delete and list handlers

use crate::error::{ApiError, FileOperation};
use crate::response::ResponseEnvelope;
use crate::translator::FileOperationRequest;
use crate::AppState;
use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Query parameters for `POST /upload`
#[derive(Debug, Default, Deserialize)]
pub struct UploadParams {
    pub path: Option<String>,
    pub content: Option<String>,
}

/// Query parameters for `DELETE /delete`
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    pub path: Option<String>,
}

/// POST /upload?path=..&content=..
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UploadParams>,
) -> Result<ResponseEnvelope<String>, ApiError> {
    info!(path = ?params.path, "upload start");
    debug!(content = ?params.content, "upload content");

    let request = FileOperationRequest::new(params.path).with_content(params.content);
    let response = state
        .translator
        .upload(request)
        .await
        .map_err(|e| ApiError::new(FileOperation::Upload, e))?;

    info!(status = response.status, "upload end");
    Ok(ResponseEnvelope::ok(
        FileOperation::Upload.success_message(),
        response.body,
    ))
}

/// DELETE /delete?path=..
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteParams>,
) -> Result<ResponseEnvelope<String>, ApiError> {
    info!(path = ?params.path, "delete start");

    let response = state
        .translator
        .delete(FileOperationRequest::new(params.path))
        .await
        .map_err(|e| ApiError::new(FileOperation::Delete, e))?;

    Ok(ResponseEnvelope::ok(
        FileOperation::Delete.success_message(),
        response.body,
    ))
}

/// GET /list - Always lists the upload root
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<ResponseEnvelope<String>, ApiError> {
    info!(root = %state.translator.upload_root(), "list start");

    let response = state
        .translator
        .list(None)
        .await
        .map_err(|e| ApiError::new(FileOperation::List, e))?;

    Ok(ResponseEnvelope::ok(
        FileOperation::List.success_message(),
        response.body,
    ))
}
