use std::sync::Once;

use pretty_assertions::assert_eq;
use tubefinder_core::{
    update, AppState, Effect, Msg, Notice, Quality, ResultsView, SearchOutcome, SearchPhase,
    SearchResultItem, DOWNLOAD_LABEL, SEARCHING_LABEL, SEARCH_LABEL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn submit_query(state: AppState, query: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    update(state, Msg::SearchClicked)
}

fn sample_items() -> Vec<SearchResultItem> {
    vec![
        SearchResultItem::new("Hey Jude (Remastered)", "/watch?v=A_MjCqQoLLA"),
        SearchResultItem::new("Hey Jude - Live", "https://www.youtube.com/watch?v=mQER0A0ej0M"),
        SearchResultItem::new("<b>Hey</b> Jude", "/watch?v=xyz"),
    ]
}

#[test]
fn search_click_with_query_emits_single_search() {
    init_logging();
    let (state, effects) = submit_query(AppState::new(), "hey jude & friends");

    assert_eq!(
        effects,
        vec![Effect::Search {
            query: "hey jude & friends".to_string()
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, SearchPhase::Searching);
    assert_eq!(view.search_button.label, SEARCHING_LABEL);
    assert!(!view.search_button.enabled);
    assert_eq!(view.results, ResultsView::Searching);
    assert!(view.dirty);
}

#[test]
fn search_click_while_searching_is_ignored() {
    init_logging();
    let (state, _effects) = submit_query(AppState::new(), "first");
    let before = state.view();

    let (state, effects) = update(state, Msg::SearchClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);

    // A different query typed mid-flight still does not start a second request.
    let (state, effects) = submit_query(state, "second");
    assert!(effects.is_empty());
    assert_eq!(state.phase(), SearchPhase::Searching);
}

#[test]
fn empty_query_raises_notice_without_request() {
    init_logging();
    let (mut state, effects) = submit_query(AppState::new(), "");
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.alert, Some(Notice::EmptyQuery));
    assert_eq!(view.phase, SearchPhase::Idle);
    assert_eq!(view.results, ResultsView::Empty);
    assert!(state.consume_dirty());

    let (state, _) = update(state, Msg::AlertDismissed);
    assert_eq!(state.view().alert, None);
}

#[test]
fn whitespace_query_is_sent_as_typed() {
    init_logging();
    let (state, effects) = submit_query(AppState::new(), "   ");
    assert_eq!(
        effects,
        vec![Effect::Search {
            query: "   ".to_string()
        }]
    );
    let view = state.view();
    assert_eq!(view.alert, None);
    assert_eq!(view.phase, SearchPhase::Searching);
}

#[test]
fn empty_response_shows_no_results() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "nothing");
    let (state, effects) = update(state, Msg::SearchCompleted(SearchOutcome::Results(vec![])));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.results, ResultsView::NoResults);
    assert_eq!(view.phase, SearchPhase::Idle);
}

#[test]
fn results_render_one_row_per_item_in_order() {
    init_logging();
    let items = sample_items();
    let (state, _) = submit_query(AppState::new(), "hey jude");
    let (state, _) = update(state, Msg::SearchCompleted(SearchOutcome::Results(items.clone())));

    let ResultsView::Rows(rows) = state.view().results else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), items.len());
    for (row, item) in rows.iter().zip(&items) {
        assert_eq!(row.title, item.title);
        assert_eq!(row.url, item.url);
        assert_eq!(row.quality_options, [Quality::P720, Quality::P480, Quality::P360]);
        assert_eq!(row.quality, Quality::P720);
        assert_eq!(row.download_button.label, DOWNLOAD_LABEL);
        assert!(row.download_button.enabled);
    }
    // Titles are carried verbatim as data.
    assert_eq!(rows[2].title, "<b>Hey</b> Jude");
}

#[test]
fn failed_search_shows_error_and_clears_guard() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "boom");
    let (state, _) = update(state, Msg::SearchCompleted(SearchOutcome::Failed));

    let view = state.view();
    assert_eq!(view.results, ResultsView::Error);
    assert_eq!(view.phase, SearchPhase::Idle);
    assert_eq!(view.alert, None);

    let (_state, effects) = update(state, Msg::SearchClicked);
    assert_eq!(
        effects,
        vec![Effect::Search {
            query: "boom".to_string()
        }]
    );
}

#[test]
fn search_button_is_restored_after_any_outcome() {
    init_logging();
    let before = AppState::new().view().search_button;
    assert_eq!(before.label, SEARCH_LABEL);

    for outcome in [
        SearchOutcome::Failed,
        SearchOutcome::Results(vec![]),
        SearchOutcome::Results(sample_items()),
    ] {
        let (state, _) = submit_query(AppState::new(), "q");
        let (state, _) = update(state, Msg::SearchCompleted(outcome));
        assert_eq!(state.view().search_button, before);
    }
}

#[test]
fn new_search_discards_previous_rows() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "first");
    let (state, _) = update(state, Msg::SearchCompleted(SearchOutcome::Results(sample_items())));

    let (state, effects) = update(state, Msg::SearchClicked);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().results, ResultsView::Searching);
}

#[test]
fn stray_completion_while_idle_is_ignored() {
    init_logging();
    let state = AppState::new();
    let before = state.view();

    let (state, effects) = update(state, Msg::SearchCompleted(SearchOutcome::Failed));
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}
