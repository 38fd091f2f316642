use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::util::colors;

/// A closed dropdown: label, current value or placeholder.
pub struct Picker<'a> {
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    focused: bool,
    enabled: bool,
}

impl<'a> Picker<'a> {
    pub fn new(label: &'a str, placeholder: &'a str, value: &'a str) -> Self {
        Self {
            label,
            placeholder,
            value,
            focused: false,
            enabled: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for Picker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        let text = if self.value.is_empty() {
            Span::styled(
                self.placeholder,
                Style::default()
                    .fg(colors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.value)
        };

        let arrow_style = if self.enabled {
            Style::default().fg(colors::SECONDARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(vec![Span::raw(" "), text])).render(inner, buf);

        if inner.width > 2 {
            buf.set_string(inner.right() - 2, inner.y, "▾", arrow_style);
        }
    }
}

/// The open option list of a dropdown, drawn over whatever is below it.
pub struct Dropdown<'a> {
    options: &'a [String],
    highlighted: usize,
}

impl<'a> Dropdown<'a> {
    pub fn new(options: &'a [String], highlighted: usize) -> Self {
        Self {
            options,
            highlighted,
        }
    }

    /// Rows needed to show every option, borders included.
    pub fn height(&self) -> u16 {
        self.options.len() as u16 + 2
    }
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| ListItem::new(format!(" {}", option)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(colors::PRIMARY))
                    .style(Style::default().bg(colors::BACKGROUND)),
            )
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.highlighted));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
