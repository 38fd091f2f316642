use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Genre,
    Mood,
    Level,
    Submit,
    History,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Genre => Focus::Mood,
            Focus::Mood => Focus::Level,
            Focus::Level => Focus::Submit,
            Focus::Submit => Focus::History,
            Focus::History => Focus::Genre,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Genre => Focus::History,
            Focus::Mood => Focus::Genre,
            Focus::Level => Focus::Mood,
            Focus::Submit => Focus::Level,
            Focus::History => Focus::Submit,
        }
    }

    pub fn is_picker(&self) -> bool {
        matches!(self, Focus::Genre | Focus::Mood | Focus::Level)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Highlighted option of the open dropdown. Only the focused picker can
    /// be open.
    pub dropdown: Option<usize>,
    pub history_cursor: usize,
    pub expanded: HashSet<usize>,
}

impl UiState {
    pub fn toggle_expanded(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }
}
