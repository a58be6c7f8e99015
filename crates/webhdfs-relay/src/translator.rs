//! Maps inbound file requests onto gateway paths under the upload root

use std::sync::Arc;
use tracing::info;
use webhdfs_client::{FileGateway, GatewayResponse, Result};

/// Per-call request built by the endpoint layer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileOperationRequest {
    /// Path relative to the upload root
    pub path: String,
    /// File content, only meaningful for uploads
    pub content: Option<String>,
}

impl FileOperationRequest {
    /// Absent values become empty strings.
    pub fn new(path: Option<String>) -> Self {
        Self {
            path: path.unwrap_or_default(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = Some(content.unwrap_or_default());
        self
    }
}

/// Prefixes paths with the upload root and delegates to a [`FileGateway`].
///
/// Paths are not sanitised here. The client drops `.`/`..` segments when
/// building the gateway URL, so the API prefix cannot be escaped.
#[derive(Clone)]
pub struct RequestTranslator {
    upload_root: String,
    gateway: Arc<dyn FileGateway>,
}

impl RequestTranslator {
    pub fn new(upload_root: impl Into<String>, gateway: Arc<dyn FileGateway>) -> Self {
        Self {
            upload_root: upload_root.into(),
            gateway,
        }
    }

    pub fn upload_root(&self) -> &str {
        &self.upload_root
    }

    /// `{upload_root}/{raw}`
    pub fn resolve(&self, raw: &str) -> String {
        format!("{}/{}", self.upload_root, raw)
    }

    pub async fn upload(&self, request: FileOperationRequest) -> Result<GatewayResponse> {
        let path = self.resolve(&request.path);
        let content = request.content.unwrap_or_default();
        info!(path = %path, size = content.len(), "Relaying upload");
        self.gateway.create(&path, &content).await
    }

    pub async fn delete(&self, request: FileOperationRequest) -> Result<GatewayResponse> {
        let path = self.resolve(&request.path);
        info!(path = %path, "Relaying delete");
        self.gateway.delete(&path).await
    }

    /// Lists the upload root itself when no sub-path is given.
    pub async fn list(&self, request: Option<FileOperationRequest>) -> Result<GatewayResponse> {
        let path = match request {
            Some(request) => self.resolve(&request.path),
            None => self.upload_root.clone(),
        };
        info!(path = %path, "Relaying list");
        self.gateway.list(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rstest::rstest;
    use std::sync::Mutex;

    /// Records every call as `(op, path, content)`
    #[derive(Default)]
    struct RecordingGateway {
        calls: Mutex<Vec<(&'static str, String, Option<String>)>>,
    }

    impl RecordingGateway {
        fn calls(&self) -> Vec<(&'static str, String, Option<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FileGateway for RecordingGateway {
        async fn create(&self, path: &str, content: &str) -> Result<GatewayResponse> {
            self.calls
                .lock()
                .unwrap()
                .push(("create", path.to_string(), Some(content.to_string())));
            Ok(GatewayResponse::new(201, ""))
        }

        async fn delete(&self, path: &str) -> Result<GatewayResponse> {
            self.calls.lock().unwrap().push(("delete", path.to_string(), None));
            Ok(GatewayResponse::new(200, r#"{"boolean":true}"#))
        }

        async fn list(&self, path: &str) -> Result<GatewayResponse> {
            self.calls.lock().unwrap().push(("list", path.to_string(), None));
            Ok(GatewayResponse::new(200, "{}"))
        }
    }

    fn translator() -> (RequestTranslator, Arc<RecordingGateway>) {
        let gateway = Arc::new(RecordingGateway::default());
        (RequestTranslator::new("/01", gateway.clone()), gateway)
    }

    #[rstest]
    #[case("test.txt", "/01/test.txt")]
    #[case("nested/dir/file.csv", "/01/nested/dir/file.csv")]
    #[case("", "/01/")]
    #[case("../escape.txt", "/01/../escape.txt")]
    fn test_resolve(#[case] raw: &str, #[case] expected: &str) {
        let (translator, _) = translator();
        assert_eq!(translator.resolve(raw), expected);
    }

    #[tokio::test]
    async fn test_upload_prefixes_root() {
        let (translator, gateway) = translator();
        let request = FileOperationRequest::new(Some("test.txt".to_string()))
            .with_content(Some("5 is the test!".to_string()));

        translator.upload(request).await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![("create", "/01/test.txt".to_string(), Some("5 is the test!".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_missing_values_become_empty() {
        let (translator, gateway) = translator();
        let request = FileOperationRequest::new(None).with_content(None);

        translator.upload(request).await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![("create", "/01/".to_string(), Some(String::new()))]
        );
    }

    #[tokio::test]
    async fn test_delete_prefixes_root() {
        let (translator, gateway) = translator();
        translator
            .delete(FileOperationRequest::new(Some("old.txt".to_string())))
            .await
            .unwrap();

        assert_eq!(gateway.calls(), vec![("delete", "/01/old.txt".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_list_without_path_uses_root() {
        let (translator, gateway) = translator();
        translator.list(None).await.unwrap();

        assert_eq!(gateway.calls(), vec![("list", "/01".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_list_with_sub_path() {
        let (translator, gateway) = translator();
        translator
            .list(Some(FileOperationRequest::new(Some("reports".to_string()))))
            .await
            .unwrap();

        assert_eq!(gateway.calls(), vec![("list", "/01/reports".to_string(), None)]);
    }
}
