//! Error types shared across HandMove crates.

use std::path::PathBuf;

/// Top-level error type for HandMove operations.
#[derive(Debug, thiserror::Error)]
pub enum HandmoveError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using HandmoveError.
pub type HandmoveResult<T> = Result<T, HandmoveError>;

impl HandmoveError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error is a rejected frame rather than an environment failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = HandmoveError::invalid_input("landmark list is empty");
        assert_eq!(err.to_string(), "Invalid input: landmark list is empty");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_config_error_is_not_invalid_input() {
        let err = HandmoveError::config("stride must be positive");
        assert!(!err.is_invalid_input());
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
