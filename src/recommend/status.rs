#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
