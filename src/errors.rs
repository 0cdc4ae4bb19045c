/// Keki Error Types
#[derive(Debug, thiserror::Error)]
pub enum KekiError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cake file persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Interactive input errors
    #[error("Input error: {0}")]
    Prompt(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl KekiError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        KekiError::Config(msg.into())
    }

    pub fn storage<S: Into<String>>(msg: S) -> Self {
        KekiError::Storage(msg.into())
    }

    pub fn prompt<S: Into<String>>(msg: S) -> Self {
        KekiError::Prompt(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        KekiError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, KekiError>;
