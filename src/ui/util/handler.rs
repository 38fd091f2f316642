use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        let before = app.controller.history().len();

        let applied = match evt {
            Event::RecommendationsFetched(id, items) => app.controller.settle(id, Ok(items)),
            Event::FetchError(id, e) => app.controller.settle(id, Err(e)),
        };

        if !applied {
            return;
        }

        let after = app.controller.history().len();
        if after > before {
            debug!(added = after - before, "History updated");
            app.state.history_cursor = before;
        }
    }

    pub async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind == KeyEventKind::Press {
            if let Some(msg) = InputHandler::handle_key(evt) {
                app.update(msg).await;
            }
        }
    }
}
