#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    /// Closes an open dropdown, otherwise quits.
    Dismiss,
    FocusNext,
    FocusPrevious,
    MoveUp,
    MoveDown,
    /// Open or pick in a dropdown, press the button, or expand an entry,
    /// depending on focus.
    Activate,
    Close,
}
