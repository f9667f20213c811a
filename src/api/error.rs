// src/api/error.rs
use crate::config::consts::{MSG_EMPTY_TEXT, MSG_GENERIC, MSG_TIMEOUT};

/// Why an analysis attempt failed. `Display` is developer detail for the log;
/// `user_message` is what the banner shows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Empty text")]
    EmptyText,
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },
    #[error("HTTP {status} without error message")]
    Status { status: u16 },
    #[error("Request timed out")]
    Timeout,
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl AnalyzeError {
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::EmptyText => s!(MSG_EMPTY_TEXT),
            AnalyzeError::Server { message, .. } => message.clone(),
            AnalyzeError::Timeout => s!(MSG_TIMEOUT),
            AnalyzeError::Status { .. }
            | AnalyzeError::Transport(_)
            | AnalyzeError::Decode(_) => s!(MSG_GENERIC),
        }
    }
}
