use crate::view_model::{
    AppViewModel, ButtonView, Notice, ResultsView, RowView, DOWNLOAD_LABEL, PROCESSING_LABEL,
    SEARCHING_LABEL, SEARCH_LABEL,
};
use crate::{normalize_video_url, Quality, SearchOutcome, SearchResultItem, DEFAULT_VIDEO_HOST};

/// Identifies a rendered result row. Ids are never reused, so a late message
/// for a row from an earlier search cannot land on a newer one.
pub type RowId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ResultsArea {
    #[default]
    Empty,
    Searching,
    NoResults,
    Failed,
    Rows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ResultRow {
    id: RowId,
    title: String,
    url: String,
    quality: Quality,
    downloading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    query: String,
    phase: SearchPhase,
    results: ResultsArea,
    rows: Vec<ResultRow>,
    next_row_id: RowId,
    video_host: String,
    alert: Option<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            results: ResultsArea::Empty,
            rows: Vec::new(),
            next_row_id: 1,
            video_host: DEFAULT_VIDEO_HOST.to_string(),
            alert: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose site-relative result URLs resolve against `video_host`.
    pub fn with_video_host(video_host: impl Into<String>) -> Self {
        Self {
            video_host: video_host.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let searching = self.phase == SearchPhase::Searching;
        AppViewModel {
            query: self.query.clone(),
            phase: self.phase,
            search_button: ButtonView {
                label: if searching { SEARCHING_LABEL } else { SEARCH_LABEL },
                enabled: !searching,
            },
            results: match self.results {
                ResultsArea::Empty => ResultsView::Empty,
                ResultsArea::Searching => ResultsView::Searching,
                ResultsArea::NoResults => ResultsView::NoResults,
                ResultsArea::Failed => ResultsView::Error,
                ResultsArea::Rows => ResultsView::Rows(self.rows.iter().map(row_view).collect()),
            },
            alert: self.alert,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn video_host(&self) -> &str {
        &self.video_host
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_search(&mut self) {
        self.phase = SearchPhase::Searching;
        self.results = ResultsArea::Searching;
        self.rows.clear();
        self.dirty = true;
    }

    pub(crate) fn finish_search(&mut self, outcome: SearchOutcome) {
        self.phase = SearchPhase::Idle;
        self.results = match outcome {
            SearchOutcome::Failed => ResultsArea::Failed,
            SearchOutcome::Results(items) if items.is_empty() => ResultsArea::NoResults,
            SearchOutcome::Results(items) => {
                let rows: Vec<ResultRow> =
                    items.into_iter().map(|item| self.new_row(item)).collect();
                self.rows = rows;
                ResultsArea::Rows
            }
        };
        self.dirty = true;
    }

    pub(crate) fn select_quality(&mut self, row_id: RowId, quality: Quality) {
        if let Some(row) = self.row_mut(row_id) {
            if row.quality != quality {
                row.quality = quality;
                self.dirty = true;
            }
        }
    }

    /// Marks the row busy and returns the normalized video URL and the
    /// selected quality. `None` if the row is unknown or already busy.
    pub(crate) fn begin_download(&mut self, row_id: RowId) -> Option<(String, Quality)> {
        let video_host = self.video_host.clone();
        let row = self.row_mut(row_id)?;
        if row.downloading {
            return None;
        }
        row.downloading = true;
        let target = (normalize_video_url(&row.url, &video_host), row.quality);
        self.dirty = true;
        Some(target)
    }

    pub(crate) fn finish_download(&mut self, row_id: RowId) {
        if let Some(row) = self.row_mut(row_id) {
            row.downloading = false;
            self.dirty = true;
        }
    }

    pub(crate) fn raise_alert(&mut self, notice: Notice) {
        self.alert = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.dirty = true;
        }
    }

    fn new_row(&mut self, item: SearchResultItem) -> ResultRow {
        let id = self.next_row_id;
        self.next_row_id += 1;
        ResultRow {
            id,
            title: item.title,
            url: item.url,
            quality: Quality::default(),
            downloading: false,
        }
    }

    fn row_mut(&mut self, row_id: RowId) -> Option<&mut ResultRow> {
        self.rows.iter_mut().find(|row| row.id == row_id)
    }
}

fn row_view(row: &ResultRow) -> RowView {
    RowView {
        row_id: row.id,
        title: row.title.clone(),
        url: row.url.clone(),
        quality_options: Quality::ALL,
        quality: row.quality,
        download_button: ButtonView {
            label: if row.downloading {
                PROCESSING_LABEL
            } else {
                DOWNLOAD_LABEL
            },
            enabled: !row.downloading,
        },
    }
}
