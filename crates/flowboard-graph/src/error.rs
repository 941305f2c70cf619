use flowboard_persist::PersistError;
use thiserror::Error;

use crate::validator::ValidationError;

/// Structural errors raised by [`crate::GraphModel`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Duplicate edge id: {0}")]
    DuplicateEdgeId(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),
}

impl GraphError {
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, GraphError::DuplicateNodeId(_) | GraphError::DuplicateEdgeId(_))
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures of a save or load issued through [`crate::EditorSession`]
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Another save or load is already in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
