//! Error types for the alert sender

/// Errors that can occur while configuring or dispatching alerts
#[derive(Debug, thiserror::Error)]
pub enum SenderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Result type alias for alert sender operations
pub type Result<T> = std::result::Result<T, SenderError>;
