//! Tubefinder engine: backend HTTP client and effect execution.
mod engine;
mod launch;
mod search;
mod types;

pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use launch::{download_target, BrowserLauncher, Launcher};
pub use search::{EngineSettings, ReqwestSearchClient, SearchClient};
pub use types::{EngineEvent, LaunchError, LaunchId, SearchError, SearchFailureKind, SearchHit};
