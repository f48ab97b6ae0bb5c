//! Tubefinder core: pure search/download controller and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod video;
mod view_model;

pub use effect::Effect;
pub use msg::{DownloadOutcome, Msg, SearchOutcome};
pub use state::{AppState, RowId, SearchPhase};
pub use update::update;
pub use video::{normalize_video_url, Quality, SearchResultItem, DEFAULT_VIDEO_HOST};
pub use view_model::{
    AppViewModel, ButtonView, Notice, ResultsView, RowView, DOWNLOAD_LABEL, PROCESSING_LABEL,
    SEARCHING_LABEL, SEARCH_LABEL,
};
