use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Dismiss),
            (KeyCode::Tab, _) => Some(AppMessage::FocusNext),
            (KeyCode::BackTab, _) => Some(AppMessage::FocusPrevious),
            (KeyCode::Up | KeyCode::Char('k'), _) => Some(AppMessage::MoveUp),
            (KeyCode::Down | KeyCode::Char('j'), _) => Some(AppMessage::MoveDown),
            (KeyCode::Enter | KeyCode::Char(' '), _) => Some(AppMessage::Activate),
            (KeyCode::Esc, _) => Some(AppMessage::Close),
            _ => None,
        }
    }
}
