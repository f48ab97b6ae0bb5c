use crate::{Quality, RowId, SearchPhase};

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const DOWNLOAD_LABEL: &str = "Download";
pub const PROCESSING_LABEL: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub phase: SearchPhase,
    pub search_button: ButtonView,
    pub results: ResultsView,
    pub alert: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

impl Default for ButtonView {
    fn default() -> Self {
        Self {
            label: SEARCH_LABEL,
            enabled: true,
        }
    }
}

/// Contents of the results area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Empty,
    Searching,
    NoResults,
    Error,
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub row_id: RowId,
    /// Backend-supplied text; display it as data, never as markup.
    pub title: String,
    pub url: String,
    pub quality_options: [Quality; 3],
    pub quality: Quality,
    pub download_button: ButtonView,
}

/// Blocking user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyQuery,
    DownloadFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::EmptyQuery => "Please enter a search query.",
            Notice::DownloadFailed => "Error fetching download link. Please try again.",
        }
    }
}
