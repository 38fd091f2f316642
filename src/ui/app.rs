use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::info;

use crate::{
    catalog::Catalog,
    config::Config,
    event::events::Event,
    http::{ApiService, RecommendationSource},
    recommend::Controller,
    util::task::TaskManager,
};

use super::{
    message::AppMessage,
    state::{Focus, UiState},
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

const FETCH_TASK: &str = "recommend";

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<dyn RecommendationSource>,
    pub controller: Controller,
    pub state: UiState,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(&config.api)?);
        Ok(Self::with_source(api, config.catalog))
    }

    pub fn with_source(api: Arc<dyn RecommendationSource>, catalog: Catalog) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            api,
            controller: Controller::new(catalog),
            state: UiState::default(),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.shutdown();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }

    /// Options of the picker under focus, empty for the other controls.
    pub fn focused_options(&self) -> Vec<String> {
        let catalog = self.controller.catalog();
        match self.state.focus {
            Focus::Genre => catalog.genres(),
            Focus::Mood => self.controller.mood_options().to_vec(),
            Focus::Level => catalog.levels(),
            Focus::Submit | Focus::History => Vec::new(),
        }
    }

    fn focused_value(&self) -> &str {
        let selection = self.controller.selection();
        match self.state.focus {
            Focus::Genre => selection.genre(),
            Focus::Mood => selection.mood(),
            Focus::Level => selection.level(),
            Focus::Submit | Focus::History => "",
        }
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Dismiss => {
                if self.state.dropdown.is_some() {
                    self.state.dropdown = None;
                } else {
                    self.should_quit = true;
                }
            }
            AppMessage::FocusNext => {
                self.state.dropdown = None;
                self.state.focus = self.state.focus.next();
            }
            AppMessage::FocusPrevious => {
                self.state.dropdown = None;
                self.state.focus = self.state.focus.prev();
            }
            AppMessage::MoveUp => self.move_cursor(-1),
            AppMessage::MoveDown => self.move_cursor(1),
            AppMessage::Activate => self.activate(),
            AppMessage::Close => self.state.dropdown = None,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if let Some(highlighted) = self.state.dropdown {
            let len = self.focused_options().len();
            self.state.dropdown = Some(step(highlighted, delta, len));
        } else if self.state.focus == Focus::History {
            let len = self.controller.history().len();
            self.state.history_cursor = step(self.state.history_cursor, delta, len);
        }
    }

    fn activate(&mut self) {
        match self.state.focus {
            focus if focus.is_picker() => self.activate_picker(),
            Focus::Submit => self.submit(),
            Focus::History => {
                if self.state.history_cursor < self.controller.history().len() {
                    self.state.toggle_expanded(self.state.history_cursor);
                }
            }
            _ => {}
        }
    }

    fn activate_picker(&mut self) {
        let options = self.focused_options();

        let Some(highlighted) = self.state.dropdown else {
            if !options.is_empty() {
                let current = options
                    .iter()
                    .position(|o| o == self.focused_value())
                    .unwrap_or(0);
                self.state.dropdown = Some(current);
            }
            return;
        };

        self.state.dropdown = None;
        let Some(choice) = options.get(highlighted).cloned() else {
            return;
        };

        match self.state.focus {
            Focus::Genre => self.controller.set_genre(choice),
            Focus::Mood => self.controller.set_mood(choice),
            Focus::Level => self.controller.set_level(choice),
            Focus::Submit | Focus::History => {}
        }
    }

    pub fn submit(&mut self) {
        let request = match self.controller.begin_fetch() {
            Ok(request) => request,
            Err(e) => {
                info!("Recommendation request not started: {}", e);
                return;
            }
        };

        let api = self.api.clone();
        let tx = self.event_tx.clone();

        self.task_manager.spawn(
            FETCH_TASK,
            tokio::spawn(async move {
                let event = match api.recommend(&request.prompt).await {
                    Ok(items) => Event::RecommendationsFetched(request.id, items),
                    Err(e) => Event::FetchError(request.id, e),
                };
                let _ = tx.send(event);
            }),
        );
    }

    /// Stops background work so nothing lands in state after the UI is gone.
    pub fn shutdown(&mut self) {
        self.task_manager.abort_all();
        self.controller.abandon();
    }
}

fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}
