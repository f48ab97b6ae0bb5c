use crate::{Quality, RowId};

/// Side effects requested by `update`; executed outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Query the search endpoint. Completion arrives as `Msg::SearchCompleted`.
    Search { query: String },
    /// Open the download endpoint for a row in a new browsing context.
    /// Completion arrives as `Msg::DownloadSettled`.
    OpenDownload {
        row_id: RowId,
        video_url: String,
        quality: Quality,
    },
}
