use std::time::Duration;

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{sort_by_created_at_desc, FailureKind, FetchError, NodeResource, NodesDocument};

/// Connection settings for the operator API.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:6688").expect("default base url"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Async source of the node collection.
#[async_trait::async_trait]
pub trait NodesApi: Send + Sync {
    /// Issues exactly one request for the full collection and returns it
    /// sorted most-recently-created first. No retry, no caching, no paging.
    async fn get_nodes(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<NodeResource>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestNodesApi {
    settings: ApiSettings,
}

impl ReqwestNodesApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn nodes_url(&self) -> Result<Url, FetchError> {
        self.settings
            .base_url
            .join("v2/nodes")
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl NodesApi for ReqwestNodesApi {
    async fn get_nodes(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<NodeResource>, FetchError> {
        let url = self.nodes_url()?;
        let client = self.build_client()?;

        let response = tokio::select! {
            _ = cancel.cancelled() => {
                return Err(FetchError::new(FailureKind::Cancelled, "fetch cancelled"));
            }
            response = client.get(url).send() => response.map_err(map_reqwest_error)?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let document = tokio::select! {
            _ = cancel.cancelled() => {
                return Err(FetchError::new(FailureKind::Cancelled, "fetch cancelled"));
            }
            document = response.json::<NodesDocument>() => {
                document.map_err(map_reqwest_error)?
            }
        };

        let mut nodes = document.data;
        sort_by_created_at_desc(&mut nodes);
        Ok(nodes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
