use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::{
    ui::{
        app::App,
        components::{
            banner::ErrorBanner,
            button::SubmitButton,
            history::HistoryList,
            picker::{Dropdown, Picker},
        },
        state::Focus,
    },
    util::colors,
};

const HELP: &str = " Tab focus · ↑↓ move · Enter select · Esc close · q quit ";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title_top(Line::from(" Shelfmood ").alignment(Alignment::Center))
            .title_bottom(Line::from(HELP).alignment(Alignment::Center));
        let inner = frame.inner(area);
        frame.render(area, buf);

        let controller = &self.controller;
        let selection = controller.selection();
        let focus = self.state.focus;
        let error = controller.status().error_message();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(if error.is_some() { 3 } else { 0 }),
                Constraint::Min(3),
            ])
            .split(inner);

        let pickers = [
            (Focus::Genre, "Genre", "Please select a genre", selection.genre(), true),
            (
                Focus::Mood,
                "Mood",
                "Please select a mood",
                selection.mood(),
                !controller.mood_options().is_empty(),
            ),
            (Focus::Level, "Level", "Please select a level", selection.level(), true),
        ];

        for (i, (field, label, placeholder, value, enabled)) in pickers.into_iter().enumerate() {
            Picker::new(label, placeholder, value)
                .focused(focus == field)
                .enabled(enabled)
                .render(chunks[i], buf);
        }

        SubmitButton::new(
            controller.can_submit(),
            controller.is_loading(),
            focus == Focus::Submit,
        )
        .render(chunks[3], buf);

        if let Some(message) = error {
            ErrorBanner::new(message).render(chunks[4], buf);
        }

        HistoryList::new(
            controller.history().entries(),
            self.state.history_cursor,
            &self.state.expanded,
            focus == Focus::History,
        )
        .render(chunks[5], buf);

        if let (Some(highlighted), Some(anchor)) = (self.state.dropdown, picker_area(focus, &chunks))
        {
            let options = self.focused_options();
            let dropdown = Dropdown::new(&options, highlighted);
            let top = anchor.bottom();
            let height = dropdown.height().min(inner.bottom().saturating_sub(top));
            let overlay = Rect::new(anchor.x + 1, top, anchor.width.saturating_sub(2), height);
            dropdown.render(overlay, buf);
        }
    }
}

fn picker_area(focus: Focus, chunks: &[Rect]) -> Option<Rect> {
    match focus {
        Focus::Genre => chunks.first().copied(),
        Focus::Mood => chunks.get(1).copied(),
        Focus::Level => chunks.get(2).copied(),
        Focus::Submit | Focus::History => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        catalog::Catalog,
        http::RecommendationSource,
        recommend::RecommendError,
        ui::components::button::SUBMIT_LABEL,
    };

    struct NoSource;

    #[async_trait]
    impl RecommendationSource for NoSource {
        async fn recommend(&self, _prompt: &str) -> Result<Vec<String>, RecommendError> {
            Err(RecommendError::EmptyResult)
        }
    }

    fn screen(app: &App) -> String {
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_placeholders_and_button() {
        let app = App::with_source(Arc::new(NoSource), Catalog::default());
        let text = screen(&app);

        assert!(text.contains("Please select a genre"));
        assert!(text.contains("Please select a mood"));
        assert!(text.contains("Please select a level"));
        assert!(text.contains(SUBMIT_LABEL));
    }

    #[test]
    fn shows_error_banner() {
        let mut app = App::with_source(Arc::new(NoSource), Catalog::default());
        let _ = app.controller.begin_fetch();
        let text = screen(&app);

        assert!(text.contains("Please select a genre, mood, level"));
    }

    #[test]
    fn open_dropdown_lists_genres() {
        let mut app = App::with_source(Arc::new(NoSource), Catalog::default());
        app.state.dropdown = Some(0);
        let text = screen(&app);

        for genre in app.controller.catalog().genres().iter().take(3) {
            assert!(text.contains(genre.as_str()));
        }
    }
}
