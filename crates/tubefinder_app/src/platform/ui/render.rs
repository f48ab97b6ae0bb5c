use tubefinder_core::{AppViewModel, ButtonView, ResultsView, RowView};

pub const SEARCHING_PLACEHOLDER: &str = "Searching...";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const SEARCH_ERROR_MESSAGE: &str = "Error fetching results. Please try again.";

/// Display commands for the terminal surface, in drawing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Start a fresh frame.
    BeginFrame,
    /// Query input and search trigger.
    SearchBar { query: String, button: ButtonView },
    /// Results area holding a single message instead of rows.
    ResultsMessage(&'static str),
    /// One result row. `number` is the 1-based index the user types.
    ResultRow {
        number: usize,
        title: String,
        options: Vec<&'static str>,
        selected: &'static str,
        button: ButtonView,
    },
    /// Blocking notice.
    Alert(&'static str),
}

pub fn render(view: &AppViewModel) -> Vec<UiCommand> {
    let mut cmds = vec![
        UiCommand::BeginFrame,
        UiCommand::SearchBar {
            query: display_text(&view.query),
            button: view.search_button,
        },
    ];

    match &view.results {
        ResultsView::Empty => {}
        ResultsView::Searching => cmds.push(UiCommand::ResultsMessage(SEARCHING_PLACEHOLDER)),
        ResultsView::NoResults => cmds.push(UiCommand::ResultsMessage(NO_RESULTS_MESSAGE)),
        ResultsView::Error => cmds.push(UiCommand::ResultsMessage(SEARCH_ERROR_MESSAGE)),
        ResultsView::Rows(rows) => cmds.extend(
            rows.iter()
                .enumerate()
                .map(|(idx, row)| result_row(idx + 1, row)),
        ),
    }

    if let Some(notice) = view.alert {
        cmds.push(UiCommand::Alert(notice.message()));
    }

    cmds
}

fn result_row(number: usize, row: &RowView) -> UiCommand {
    UiCommand::ResultRow {
        number,
        title: display_text(&row.title),
        options: row.quality_options.iter().map(|q| q.label()).collect(),
        selected: row.quality.label(),
        button: row.download_button,
    }
}

/// Backend text is shown as plain data: control characters (including the
/// escape that starts terminal sequences) and bidi formatting characters are
/// dropped.
fn display_text(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_control() && !is_bidi_format(*ch))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_bidi_format(ch: char) -> bool {
    matches!(
        ch,
        '\u{061C}' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}'
    )
}
