pub mod id;
pub mod model;
pub mod validator;
pub mod session;
pub mod builder;
pub mod error;

pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator, DEFAULT_ID_LENGTH};
pub use model::{starter_snapshot, GraphModel};
pub use validator::{
    validate, GraphValidator, ValidationError, ValidationReport, Violation, ViolationKind,
};
pub use session::EditorSession;
pub use builder::SessionBuilder;
pub use error::{GraphError, Result, SessionError};

// Re-export the data model so callers need only this crate
pub use flowboard_types::{
    Edge, GraphSnapshot, Node, NodeCategory, NodeData, NodeStyle, Position, Viewport,
};
