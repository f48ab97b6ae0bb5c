use crate::{AppState, DownloadOutcome, Effect, Msg, Notice, SearchPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SearchClicked => {
            // One search at a time: a trigger while searching is dropped, not queued.
            if state.phase() == SearchPhase::Searching {
                return (state, Vec::new());
            }
            if state.query().is_empty() {
                state.raise_alert(Notice::EmptyQuery);
                return (state, Vec::new());
            }
            let query = state.query().to_string();
            state.begin_search();
            vec![Effect::Search { query }]
        }
        Msg::SearchCompleted(outcome) => {
            if state.phase() == SearchPhase::Searching {
                state.finish_search(outcome);
            }
            Vec::new()
        }
        Msg::QualitySelected { row_id, quality } => {
            state.select_quality(row_id, quality);
            Vec::new()
        }
        Msg::DownloadClicked { row_id } => match state.begin_download(row_id) {
            Some((video_url, quality)) => vec![Effect::OpenDownload {
                row_id,
                video_url,
                quality,
            }],
            None => Vec::new(),
        },
        Msg::DownloadSettled { row_id, outcome } => {
            state.finish_download(row_id);
            if outcome == DownloadOutcome::Failed {
                state.raise_alert(Notice::DownloadFailed);
            }
            Vec::new()
        }
        Msg::AlertDismissed => {
            state.dismiss_alert();
            Vec::new()
        }
    };

    (state, effects)
}
