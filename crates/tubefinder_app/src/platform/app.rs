use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_info, engine_warn};
use tubefinder_core::{update, AppState, Effect, Msg, ResultsView, RowId};
use tubefinder_engine::EngineError;

use super::config::{load_config, AppConfig, ConfigError, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_line, InputAction};
use super::ui::render::render;
use super::ui::terminal::Terminal;

/// Everything the event loop reacts to.
pub enum AppEvent {
    /// Engine completion, already mapped to a core message.
    Core(Msg),
    /// A parsed line from the prompt.
    Input(InputAction),
    /// Input closed or the user asked to leave.
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("terminal io failed: {0}")]
    Io(#[from] io::Error),
}

pub fn run_app() -> Result<(), AppError> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let loaded = load_config(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    logging::initialize(config.log_destination);
    let mut terminal = Terminal::new(io::stdout());
    match loaded {
        Ok(Some(_)) => engine_info!("Loaded config from {:?}", config_path),
        Ok(None) => engine_info!("No config at {:?}; using defaults", config_path),
        Err(err) => {
            engine_warn!("{}; using defaults", err);
            terminal.hint(&format!("{err}; using defaults"))?;
        }
    }

    let settings = config.engine_settings()?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(settings, event_tx.clone())?;
    spawn_input_reader(event_tx)?;

    let mut controller = Controller::new(
        AppState::with_video_host(config.video_host.clone()),
        runner,
        terminal,
    );
    controller.start()?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Core(msg) => controller.dispatch(vec![msg])?,
            AppEvent::Input(action) => controller.handle_input(action)?,
            AppEvent::Quit => break,
        }
    }

    engine_info!("Shutting down");
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("tubefinder-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let event = match parse_line(&line) {
                    Some(InputAction::Quit) => AppEvent::Quit,
                    Some(action) => AppEvent::Input(action),
                    None => continue,
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
            let _ = tx.send(AppEvent::Quit);
        })?;
    Ok(())
}

/// Where the controller sends the effects returned by `update`.
pub trait EffectExecutor {
    fn enqueue(&self, effects: Vec<Effect>);
}

/// Owns the controller state and is the only place it changes.
struct Controller<E: EffectExecutor, W: Write> {
    state: AppState,
    executor: E,
    terminal: Terminal<W>,
}

impl<E: EffectExecutor, W: Write> Controller<E, W> {
    fn new(state: AppState, executor: E, terminal: Terminal<W>) -> Self {
        Self {
            state,
            executor,
            terminal,
        }
    }

    fn start(&mut self) -> io::Result<()> {
        self.terminal.help()?;
        self.redraw()
    }

    /// Apply messages in order, hand off their effects, and redraw once if
    /// anything visible changed.
    fn dispatch(&mut self, msgs: Vec<Msg>) -> io::Result<()> {
        let mut state = std::mem::take(&mut self.state);
        let mut effects = Vec::new();
        for msg in msgs {
            let (next, mut emitted) = update(state, msg);
            state = next;
            effects.append(&mut emitted);
        }
        let was_dirty = state.consume_dirty();
        self.state = state;

        if !effects.is_empty() {
            self.executor.enqueue(effects);
        }
        if was_dirty {
            self.redraw()?;
        }
        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        let view = self.state.view();
        self.terminal.apply(&render(&view))?;

        if view.alert.is_some() {
            // Printed alerts need no acknowledgement; clear without another frame.
            let state = std::mem::take(&mut self.state);
            let (mut state, _) = update(state, Msg::AlertDismissed);
            state.consume_dirty();
            self.state = state;
        }
        Ok(())
    }

    fn handle_input(&mut self, action: InputAction) -> io::Result<()> {
        match action {
            InputAction::Search(query) => {
                self.dispatch(vec![Msg::QueryChanged(query), Msg::SearchClicked])
            }
            InputAction::SelectQuality { number, quality } => match self.row_id(number) {
                Some(row_id) => self.dispatch(vec![Msg::QualitySelected { row_id, quality }]),
                None => self.terminal.hint(&format!("No result row {number}")),
            },
            InputAction::Download { number } => match self.row_id(number) {
                Some(row_id) => self.dispatch(vec![Msg::DownloadClicked { row_id }]),
                None => self.terminal.hint(&format!("No result row {number}")),
            },
            InputAction::Help => self.terminal.help(),
            InputAction::Invalid(message) => self.terminal.hint(&message),
            InputAction::Quit => Ok(()),
        }
    }

    fn row_id(&self, number: usize) -> Option<RowId> {
        match self.state.view().results {
            ResultsView::Rows(rows) => rows.get(number.checked_sub(1)?).map(|row| row.row_id),
            _ => None,
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (AppState, E, W) {
        (self.state, self.executor, self.terminal.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tubefinder_core::{
        AppState, DownloadOutcome, Effect, Msg, Quality, ResultsView, SearchOutcome,
        SearchResultItem,
    };

    use super::{Controller, EffectExecutor};
    use crate::platform::ui::input::InputAction;
    use crate::platform::ui::terminal::Terminal;

    #[derive(Default)]
    struct RecordingExecutor {
        effects: RefCell<Vec<Effect>>,
    }

    impl EffectExecutor for RecordingExecutor {
        fn enqueue(&self, effects: Vec<Effect>) {
            self.effects.borrow_mut().extend(effects);
        }
    }

    fn controller() -> TestController {
        Controller::new(
            AppState::new(),
            RecordingExecutor::default(),
            Terminal::new(Vec::new()),
        )
    }

    type TestController = Controller<RecordingExecutor, Vec<u8>>;

    fn with_results(mut controller: TestController) -> TestController {
        controller
            .handle_input(InputAction::Search("cats".to_string()))
            .unwrap();
        controller
            .dispatch(vec![Msg::SearchCompleted(SearchOutcome::Results(vec![
                SearchResultItem::new("One", "/watch?v=1"),
                SearchResultItem::new("Two", "/watch?v=2"),
            ]))])
            .unwrap();
        controller
    }

    #[test]
    fn search_input_issues_one_search_and_draws_placeholder() {
        let mut controller = controller();
        controller
            .handle_input(InputAction::Search("cats".to_string()))
            .unwrap();
        controller
            .handle_input(InputAction::Search("dogs".to_string()))
            .unwrap();

        let (_, executor, out) = controller.into_parts();
        assert_eq!(
            executor.effects.into_inner(),
            vec![Effect::Search {
                query: "cats".to_string()
            }]
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Query: cats  <Searching...>"));
        assert!(text.contains("  Searching..."));
    }

    #[test]
    fn row_numbers_map_to_rows() {
        let mut controller = with_results(controller());
        controller
            .handle_input(InputAction::SelectQuality {
                number: 2,
                quality: Quality::P480,
            })
            .unwrap();
        controller
            .handle_input(InputAction::Download { number: 2 })
            .unwrap();
        controller
            .handle_input(InputAction::Download { number: 3 })
            .unwrap();

        let (_, executor, out) = controller.into_parts();
        let effects = executor.effects.into_inner();
        assert_eq!(effects.len(), 2);
        assert!(matches!(
            &effects[1],
            Effect::OpenDownload { video_url, quality: Quality::P480, .. }
                if video_url == "https://www.youtube.com/watch?v=2"
        ));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("-- No result row 3"));
        assert!(text.contains("<Processing...>"));
    }

    #[test]
    fn alert_is_printed_once_and_cleared() {
        let mut controller = controller();
        controller
            .handle_input(InputAction::Search(String::new()))
            .unwrap();
        controller.dispatch(vec![Msg::AlertDismissed]).unwrap();

        let (state, executor, out) = controller.into_parts();
        assert!(executor.effects.into_inner().is_empty());
        assert_eq!(state.view().alert, None);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("!! Please enter a search query.").count(), 1);
    }

    #[test]
    fn failed_launch_restores_button_and_alerts() {
        let mut controller = with_results(controller());
        controller
            .handle_input(InputAction::Download { number: 1 })
            .unwrap();
        let row_id = match controller.state.view().results {
            ResultsView::Rows(rows) => rows[0].row_id,
            _ => panic!("expected rows"),
        };
        controller
            .dispatch(vec![Msg::DownloadSettled {
                row_id,
                outcome: DownloadOutcome::Failed,
            }])
            .unwrap();

        let (state, _, out) = controller.into_parts();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("!! Error fetching download link. Please try again.\n"));
        match state.view().results {
            ResultsView::Rows(rows) => assert!(rows[0].download_button.enabled),
            _ => panic!("expected rows"),
        }
    }
}
