use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Flow not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "mongodb")]
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PersistError {
    /// Whether retrying the same request could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            PersistError::Transport(_) | PersistError::Connection(_) => true,
            PersistError::Server { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
