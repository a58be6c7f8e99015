//! Main client implementation

use crate::{ClientConfig, ClientError, FileGateway, GatewayOp, GatewayResponse, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, redirect, Client, Response};
use tracing::{debug, info, instrument};
use url::Url;

/// WebHDFS REST client
///
/// Automatic redirects are disabled on the underlying HTTP client: the
/// CREATE hand-off from the NameNode to a DataNode is followed explicitly
/// by [`WebHdfsClient::create`], and DELETE/LISTSTATUS never follow.
#[derive(Clone, Debug)]
pub struct WebHdfsClient {
    config: ClientConfig,
    http: Client,
}

impl WebHdfsClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url().is_empty() {
            return Err(ClientError::Config("gateway URL must not be empty".to_string()));
        }
        if config.user_name.is_empty() {
            return Err(ClientError::Config("user name must not be empty".to_string()));
        }
        Url::parse(config.base_url()).map_err(|e| ClientError::InvalidUrl {
            url: config.gateway_url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = header::HeaderMap::new();
        let user_agent = header::HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ClientError::Config(format!("invalid user agent: {}", e)))?;
        headers.insert(header::USER_AGENT, user_agent);

        let http = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Create with gateway URL
    pub fn with_gateway(gateway_url: &str) -> Result<Self> {
        Self::new(ClientConfig::new(gateway_url))
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build `{base}{path}?op={OP}&user.name={user}[&overwrite=true]`
    ///
    /// `path` is appended segment by segment, so `?`, `#` and `%` stay part
    /// of the file name. `.` and `..` segments are dropped and cannot climb
    /// above the base URL.
    pub fn operation_url(&self, path: &str, op: GatewayOp) -> Result<Url> {
        let base = self.config.base_url();
        let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        let relative = path.strip_prefix('/').unwrap_or(path);
        if !relative.is_empty() {
            url.path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl {
                    url: base.to_string(),
                    reason: "cannot append path segments".to_string(),
                })?
                .extend(relative.split('/'));
        }

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("op", op.as_str())
                .append_pair("user.name", &self.config.user_name);
            if op == GatewayOp::Create {
                query.append_pair("overwrite", "true");
            }
        }

        Ok(url)
    }

    /// PUT to the NameNode, then PUT the same bytes to the DataNode named
    /// in the redirect.
    #[instrument(skip(self, content), fields(size = content.len()))]
    pub async fn create(&self, path: &str, content: &str) -> Result<GatewayResponse> {
        let url = self.operation_url(path, GatewayOp::Create)?;
        info!(uri = %url, "Creating file");

        let body = Bytes::copy_from_slice(content.as_bytes());
        let response = self.put(url.clone(), body.clone()).await?;

        if !response.status().is_redirection() {
            return into_gateway_response(response).await;
        }

        let location = redirect_target(&url, &response)?;
        info!(redirect = %location, "Following create redirect");

        let response = self.put(location, body).await?;
        into_gateway_response(response).await
    }

    /// Delete a path. Redirects are reported, not followed.
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<GatewayResponse> {
        let url = self.operation_url(path, GatewayOp::Delete)?;
        info!(uri = %url, "Deleting path");

        let response = self.http.delete(url).send().await?;
        into_gateway_response(response).await
    }

    /// List a directory. Redirects are reported, not followed.
    #[instrument(skip(self))]
    pub async fn list(&self, path: &str) -> Result<GatewayResponse> {
        let url = self.operation_url(path, GatewayOp::ListStatus)?;
        info!(uri = %url, "Listing directory");

        let response = self.http.get(url).send().await?;
        into_gateway_response(response).await
    }

    async fn put(&self, url: Url, body: Bytes) -> Result<Response> {
        debug!("Sending PUT request to {}", url);
        let response = self
            .http
            .put(url)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl FileGateway for WebHdfsClient {
    async fn create(&self, path: &str, content: &str) -> Result<GatewayResponse> {
        WebHdfsClient::create(self, path, content).await
    }

    async fn delete(&self, path: &str) -> Result<GatewayResponse> {
        WebHdfsClient::delete(self, path).await
    }

    async fn list(&self, path: &str) -> Result<GatewayResponse> {
        WebHdfsClient::list(self, path).await
    }
}

/// Resolve the redirect `Location` against the URL that produced it.
fn redirect_target(request_url: &Url, response: &Response) -> Result<Url> {
    let status = response.status().as_u16();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ClientError::MalformedRedirect { status })?;

    request_url
        .join(location)
        .map_err(|_| ClientError::MalformedRedirect { status })
}

async fn into_gateway_response(response: Response) -> Result<GatewayResponse> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        debug!(status = status.as_u16(), "Gateway reported failure");
        return Err(ClientError::Gateway {
            status: status.as_u16(),
            body,
        });
    }

    Ok(GatewayResponse::new(status.as_u16(), body))
}
