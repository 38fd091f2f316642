#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    Add(String),
    AddMany(Vec<String>),
    Clear,
}

/// Applies `action` to `history`. Entries are only ever appended in the
/// order given, or all dropped at once.
pub fn reduce(mut history: Vec<String>, action: HistoryAction) -> Vec<String> {
    match action {
        HistoryAction::Add(item) => history.push(item),
        HistoryAction::AddMany(items) => history.extend(items),
        HistoryAction::Clear => history.clear(),
    }
    history
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn dispatch(&mut self, action: HistoryAction) {
        self.entries = reduce(std::mem::take(&mut self.entries), action);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
