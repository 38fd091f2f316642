use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{ui::components::spinner::Spinner, util::colors};

pub const SUBMIT_LABEL: &str = "Get Recommendation";
pub const LOADING_LABEL: &str = "Finding books...";

pub struct SubmitButton {
    enabled: bool,
    loading: bool,
    focused: bool,
}

impl SubmitButton {
    pub fn new(enabled: bool, loading: bool, focused: bool) -> Self {
        Self {
            enabled,
            loading,
            focused,
        }
    }
}

impl Widget for SubmitButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match (self.enabled, self.focused) {
            (true, true) => Style::default()
                .fg(colors::BACKGROUND)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(colors::PRIMARY),
            (false, _) => Style::default().fg(colors::NEUTRAL),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(if self.focused {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::NEUTRAL)
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if self.loading {
            Spinner::new()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label(LOADING_LABEL)
                .render(inner, buf);
        } else {
            Paragraph::new(SUBMIT_LABEL)
                .alignment(Alignment::Center)
                .style(style)
                .render(inner, buf);
        }
    }
}
