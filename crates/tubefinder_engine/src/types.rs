use std::fmt;

use serde::Deserialize;
use url::Url;

/// Correlates a download launch with its completion event.
pub type LaunchId = u64;

/// One search hit as returned by the backend. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        result: Result<Vec<SearchHit>, SearchError>,
    },
    DownloadLaunched {
        launch_id: LaunchId,
        result: Result<Url, LaunchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SearchError {
    pub kind: SearchFailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: SearchFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for SearchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchFailureKind::InvalidUrl => write!(f, "invalid url"),
            SearchFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            SearchFailureKind::Timeout => write!(f, "timeout"),
            SearchFailureKind::Network => write!(f, "network error"),
            SearchFailureKind::Decode => write!(f, "malformed response body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaunchError {
    #[error("invalid download target: {0}")]
    InvalidTarget(String),
    #[error("failed to open browser: {0}")]
    Browser(String),
    #[error("launch task failed: {0}")]
    Task(String),
}
