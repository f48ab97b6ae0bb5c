use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use url::Url;

use crate::{SearchError, SearchFailureKind, SearchHit};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000/";

#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Root of the backend; endpoint paths are resolved relative to it.
    pub backend_url: Url,
    /// `None` leaves connection setup to the transport.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the overall request timeout to the transport.
    pub request_timeout: Option<Duration>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend url is valid"),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestSearchClient {
    pub fn new(settings: &EngineSettings) -> Result<Self, SearchError> {
        let endpoint = settings
            .backend_url
            .join("api/search")
            .map_err(|err| SearchError::new(SearchFailureKind::InvalidUrl, err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SearchError::new(SearchFailureKind::Network, err.to_string()))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        engine_info!("Search request query_len={}", query.len());

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                SearchFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let hits: Vec<SearchHit> = serde_json::from_slice(&body)
            .map_err(|err| SearchError::new(SearchFailureKind::Decode, err.to_string()))?;

        engine_debug!("Search returned {} hits", hits.len());
        Ok(hits)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(SearchFailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SearchError::new(SearchFailureKind::Decode, err.to_string());
    }
    SearchError::new(SearchFailureKind::Network, err.to_string())
}
