use thiserror::Error;

pub const EMPTY_RESULT_MESSAGE: &str = "No recommendations received";
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Failed to fetch recommendations";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Please select a {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("A recommendation request is already in progress")]
    Busy,

    #[error("{}", transport_message(.0))]
    Transport(String),

    #[error("Request failed with status {status}{}", detail_suffix(.detail))]
    Protocol { status: u16, detail: Option<String> },

    #[error("{}", EMPTY_RESULT_MESSAGE)]
    EmptyResult,
}

impl RecommendError {
    pub fn transport(message: impl Into<String>) -> Self {
        RecommendError::Transport(message.into())
    }
}

fn transport_message(message: &str) -> &str {
    if message.trim().is_empty() {
        TRANSPORT_FALLBACK_MESSAGE
    } else {
        message
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!(": {}", detail),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_message_embeds_status() {
        let err = RecommendError::Protocol {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "Request failed with status 500");

        let err = RecommendError::Protocol {
            status: 403,
            detail: Some("API key not valid".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status 403: API key not valid"
        );
    }

    #[test]
    fn blank_transport_message_falls_back() {
        assert_eq!(
            RecommendError::transport("").to_string(),
            TRANSPORT_FALLBACK_MESSAGE
        );
        assert_eq!(
            RecommendError::transport("connection refused").to_string(),
            "connection refused"
        );
    }

    #[test]
    fn empty_result_uses_shared_message() {
        assert_eq!(RecommendError::EmptyResult.to_string(), EMPTY_RESULT_MESSAGE);
    }

    #[test]
    fn validation_lists_missing_fields() {
        let err = RecommendError::Validation {
            missing: vec!["mood", "level"],
        };
        assert_eq!(err.to_string(), "Please select a mood, level");
    }
}
