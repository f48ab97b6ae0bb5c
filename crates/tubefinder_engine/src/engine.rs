use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_info, engine_warn};
use url::Url;

use crate::launch::{download_target, BrowserLauncher, Launcher};
use crate::search::{EngineSettings, ReqwestSearchClient, SearchClient};
use crate::{EngineEvent, LaunchError, LaunchId, SearchError};

enum EngineCommand {
    Search {
        query: String,
    },
    OpenDownload {
        launch_id: LaunchId,
        video_url: String,
        quality: String,
    },
}

/// Receives engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build search client: {0}")]
    Client(#[from] SearchError),
}

/// Runs effects as detached tasks on a dedicated tokio runtime.
///
/// Every command reports exactly one `EngineEvent` to the sink. Dropping the
/// handle shuts the runtime down and cancels tasks still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = ReqwestSearchClient::new(&settings)?;
        engine_info!("Search endpoint {}", client.endpoint());
        Self::with_parts(
            settings.backend_url,
            Arc::new(client),
            Arc::new(BrowserLauncher),
            sink,
        )
    }

    pub fn with_parts(
        backend_url: Url,
        client: Arc<dyn SearchClient>,
        launcher: Arc<dyn Launcher>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("tubefinder-engine-worker")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("tubefinder-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let context = CommandContext {
                        backend_url: backend_url.clone(),
                        client: client.clone(),
                        launcher: launcher.clone(),
                        sink: sink.clone(),
                    };
                    runtime.spawn(handle_command(context, command));
                }
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn search(&self, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            query: query.into(),
        });
    }

    pub fn open_download(
        &self,
        launch_id: LaunchId,
        video_url: impl Into<String>,
        quality: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::OpenDownload {
            launch_id,
            video_url: video_url.into(),
            quality: quality.into(),
        });
    }
}

struct CommandContext {
    backend_url: Url,
    client: Arc<dyn SearchClient>,
    launcher: Arc<dyn Launcher>,
    sink: Arc<dyn EventSink>,
}

async fn handle_command(context: CommandContext, command: EngineCommand) {
    match command {
        EngineCommand::Search { query } => {
            let result = context.client.search(&query).await;
            match &result {
                Ok(hits) => engine_info!("Search completed with {} hits", hits.len()),
                Err(err) => engine_warn!("Search failed: {}", err),
            }
            context.sink.emit(EngineEvent::SearchCompleted { result });
        }
        EngineCommand::OpenDownload {
            launch_id,
            video_url,
            quality,
        } => {
            let result = launch_download(&context, &video_url, &quality).await;
            match &result {
                Ok(target) => engine_info!("Launch {} opened {}", launch_id, target),
                Err(err) => engine_warn!("Launch {} failed: {}", launch_id, err),
            }
            context
                .sink
                .emit(EngineEvent::DownloadLaunched { launch_id, result });
        }
    }
}

async fn launch_download(
    context: &CommandContext,
    video_url: &str,
    quality: &str,
) -> Result<Url, LaunchError> {
    let target = download_target(&context.backend_url, video_url, quality)?;
    let launcher = context.launcher.clone();
    let opened = target.clone();
    tokio::task::spawn_blocking(move || launcher.open(&opened))
        .await
        .map_err(|err| LaunchError::Task(err.to_string()))??;
    Ok(target)
}
