use std::sync::{mpsc, Arc};

use engine_logging::engine_info;
use tubefinder_core::{DownloadOutcome, Effect, Msg, SearchOutcome, SearchResultItem};
use tubefinder_engine::{EngineError, EngineEvent, EngineHandle, EngineSettings, EventSink};

use super::app::{AppEvent, EffectExecutor};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings, events: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { tx: events });
        let engine = EngineHandle::new(settings, sink)?;
        Ok(Self { engine })
    }
}

impl EffectExecutor for EffectRunner {
    fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search { query } => self.engine.search(query),
                Effect::OpenDownload {
                    row_id,
                    video_url,
                    quality,
                } => {
                    engine_info!(
                        "OpenDownload row_id={} quality={} url={}",
                        row_id,
                        quality,
                        video_url
                    );
                    // Row ids double as launch ids so completions map straight back.
                    self.engine.open_download(row_id, video_url, quality.label());
                }
            }
        }
    }
}

struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Core(map_event(event)));
    }
}

/// Failures are already logged by the engine; only the outcome crosses over.
fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { result } => Msg::SearchCompleted(match result {
            Ok(hits) => SearchOutcome::Results(
                hits.into_iter()
                    .map(|hit| SearchResultItem::new(hit.title, hit.url))
                    .collect(),
            ),
            Err(_) => SearchOutcome::Failed,
        }),
        EngineEvent::DownloadLaunched { launch_id, result } => Msg::DownloadSettled {
            row_id: launch_id,
            outcome: match result {
                Ok(_) => DownloadOutcome::Opened,
                Err(_) => DownloadOutcome::Failed,
            },
        },
    }
}
