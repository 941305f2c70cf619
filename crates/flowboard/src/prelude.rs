//! Prelude module for convenient imports
//!
//! ```rust
//! use flowboard::prelude::*;
//! ```

pub use crate::{
    starter_snapshot, validate, Edge, EditorSession, FlowKey, GraphError, GraphModel,
    GraphSnapshot, GraphValidator, HttpFlowGateway, InMemoryFlowStore, Node, NodeData,
    PersistenceGateway, Position, SessionError, ViolationKind,
};
