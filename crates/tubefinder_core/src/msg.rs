use crate::{Quality, RowId, SearchResultItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    QueryChanged(String),
    /// User activated the search trigger.
    SearchClicked,
    /// Engine finished the outstanding search request.
    SearchCompleted(SearchOutcome),
    /// User picked a quality on a result row.
    QualitySelected { row_id: RowId, quality: Quality },
    /// User activated a row's download trigger.
    DownloadClicked { row_id: RowId },
    /// Engine finished (or failed) opening the download target for a row.
    DownloadSettled {
        row_id: RowId,
        outcome: DownloadOutcome,
    },
    /// The current alert has been shown to the user.
    AlertDismissed,
}

/// What the core needs to know about a finished search. Transport detail stays
/// in the engine's logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Results(Vec<SearchResultItem>),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Opened,
    Failed,
}
