//! HTTP route definitions

use crate::{handlers, middleware, AppState};
use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Prefix the file routes are additionally mounted under
pub const WEBHDFS_PREFIX: &str = "/webhdfs/v1";

/// Create the main router
pub fn create_router(state: Arc<AppState>) -> Router {
    let files = Router::new()
        .route("/upload", post(handlers::upload_file))
        .route("/delete", delete(handlers::delete_file))
        .route("/list", get(handlers::list_files));

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(files.clone())
        .nest(WEBHDFS_PREFIX, files)
        .layer(axum_middleware::from_fn(middleware::access_log_middleware))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware));

    let router = if state.config.cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseEnvelope;
    use crate::RelayConfig;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;
    use webhdfs_client::{ClientError, FileGateway, GatewayResponse, Result};

    /// Answers every call with a fixed outcome
    enum StubGateway {
        Ok(&'static str),
        Unreachable,
        Status(u16, &'static str),
    }

    impl StubGateway {
        fn answer(&self) -> Result<GatewayResponse> {
            match self {
                Self::Ok(body) => Ok(GatewayResponse::new(200, *body)),
                Self::Unreachable => Err(ClientError::Timeout {
                    url: "http://namenode:9870/webhdfs/v1/01".to_string(),
                }),
                Self::Status(status, body) => Err(ClientError::Gateway {
                    status: *status,
                    body: body.to_string(),
                }),
            }
        }
    }

    #[async_trait]
    impl FileGateway for StubGateway {
        async fn create(&self, _path: &str, _content: &str) -> Result<GatewayResponse> {
            self.answer()
        }

        async fn delete(&self, _path: &str) -> Result<GatewayResponse> {
            self.answer()
        }

        async fn list(&self, _path: &str) -> Result<GatewayResponse> {
            self.answer()
        }
    }

    fn router(gateway: StubGateway) -> Router {
        let state = AppState::with_gateway(RelayConfig::default(), Arc::new(gateway));
        create_router(Arc::new(state))
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, ResponseEnvelope<String>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_upload_success_envelope() {
        let (status, envelope) =
            send(router(StubGateway::Ok("")), "POST", "/upload?path=a.txt&content=hi").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.message, "File uploaded successfully");
        assert_eq!(envelope.data, "");
    }

    #[tokio::test]
    async fn test_upload_without_params_is_not_rejected() {
        let (status, _) = send(router(StubGateway::Ok("")), "POST", "/upload").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_false_body_is_success() {
        let (status, envelope) = send(
            router(StubGateway::Ok(r#"{"boolean":false}"#)),
            "DELETE",
            "/delete?path=gone.txt",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.message, "File deleted successfully");
        assert_eq!(envelope.data, r#"{"boolean":false}"#);
    }

    #[tokio::test]
    async fn test_transport_failure_is_500_with_message() {
        let (status, envelope) = send(router(StubGateway::Unreachable), "GET", "/list").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.message, "Failed to list directory");
        assert!(envelope.data.contains("timed out"));
    }

    #[tokio::test]
    async fn test_gateway_not_found_is_mirrored() {
        let remote = r#"{"RemoteException":{"exception":"FileNotFoundException"}}"#;
        let (status, envelope) = send(router(StubGateway::Status(404, remote)), "GET", "/list").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.data, remote);
    }

    #[tokio::test]
    async fn test_gateway_server_error_is_bad_gateway() {
        let (status, envelope) =
            send(router(StubGateway::Status(503, "down")), "POST", "/upload?path=a").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(envelope.message, "File upload failed");
    }

    #[tokio::test]
    async fn test_routes_under_webhdfs_prefix() {
        let (status, envelope) = send(router(StubGateway::Ok("{}")), "GET", "/webhdfs/v1/list").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.message, "Directory listed successfully");
    }

    #[tokio::test]
    async fn test_health_and_request_id() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router(StubGateway::Unreachable).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(middleware::REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let request = Request::builder()
            .method("GET")
            .uri("/upload")
            .body(Body::empty())
            .unwrap();
        let response = router(StubGateway::Ok("")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
