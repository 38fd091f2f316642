use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{ui::util::wrap_text, util::colors};

const INDENT: &str = "    ";

/// Past recommendations as collapsible "Recommendation N" entries.
pub struct HistoryList<'a> {
    entries: &'a [String],
    cursor: usize,
    expanded: &'a HashSet<usize>,
    focused: bool,
}

impl<'a> HistoryList<'a> {
    pub fn new(
        entries: &'a [String],
        cursor: usize,
        expanded: &'a HashSet<usize>,
        focused: bool,
    ) -> Self {
        Self {
            entries,
            cursor,
            expanded,
            focused,
        }
    }

    /// Lines to draw for `width` columns, and the row of the cursor entry.
    fn lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        let mut cursor_row = 0;

        for (index, entry) in self.entries.iter().enumerate() {
            let is_open = self.expanded.contains(&index);
            let is_cursor = index == self.cursor;
            if is_cursor {
                cursor_row = lines.len();
            }

            let marker = if is_open { "▾" } else { "▸" };
            let style = if is_cursor && self.focused {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::SECONDARY)
            };
            lines.push(Line::styled(
                format!("{} Recommendation {}", marker, index + 1),
                style,
            ));

            if is_open {
                let text_width = width.saturating_sub(INDENT.len());
                lines.extend(
                    wrap_text(entry, text_width)
                        .into_iter()
                        .map(|line| Line::raw(format!("{}{}", INDENT, line))),
                );
                lines.push(Line::default());
            }
        }

        (lines, cursor_row)
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(if self.focused {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::NEUTRAL)
            })
            .title(format!(" Recommendations ({}) ", self.entries.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Line::styled(
                " Pick a genre, mood and level, then ask for recommendations.",
                Style::default().fg(colors::MUTED),
            ))
            .render(inner, buf);
            return;
        }

        let (lines, cursor_row) = self.lines(inner.width as usize);
        let height = inner.height as usize;
        let scroll = cursor_row.saturating_sub(height.saturating_sub(1));

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }
}
