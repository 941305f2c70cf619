//! # Flowboard
//!
//! Core of a visual flow editor: a graph of typed nodes joined by directed
//! edges, a structural validator, and a persistence gateway that stores
//! snapshots of the graph in a flows backend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowboard::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Talk to the flows backend at FLOWBOARD_API_URL (or localhost:8000)
//!     let gateway = Arc::new(HttpFlowGateway::from_env()?);
//!
//!     let session = EditorSession::builder()
//!         .gateway(gateway)
//!         .initial_snapshot(starter_snapshot())
//!         .build()?;
//!
//!     // Drop a node and wire it up
//!     session
//!         .edit(|graph| -> Result<(), GraphError> {
//!             let id = graph.create_node("database", Position::new(250.0, 400.0))?;
//!             graph.connect("2", &id)?;
//!             Ok(())
//!         })
//!         .await?;
//!
//!     let receipt = session.save().await?;
//!     println!("saved flow {}", receipt.id);
//!
//!     session.load_latest().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`flowboard-types`**: serializable nodes, edges and snapshots
//! - **`flowboard-graph`**: graph model, validator and editor session
//! - **`flowboard-persist`**: persistence gateway with HTTP, in-memory and MongoDB backends
//!
//! The `flowboard-api` binary serves the same `/flows` contract the HTTP
//! gateway speaks.

pub mod prelude;

pub use flowboard_types::{
    Edge, GraphSnapshot, Node, NodeCategory, NodeData, NodeStyle, Position, Viewport,
    DEFAULT_RENDERER,
};

pub use flowboard_graph::{
    starter_snapshot, validate, EditorSession, GraphError, GraphModel, GraphValidator,
    IdGenerator, RandomIdGenerator, SequentialIdGenerator, SessionBuilder, SessionError,
    ValidationError, ValidationReport, Violation, ViolationKind,
};

pub use flowboard_persist::{
    FlowKey, FlowRecord, FlowStore, FlowSummary, GatewayBuilder, GatewayConfig, HttpFlowGateway,
    InMemoryFlowStore, PersistError, PersistenceGateway, SaveReceipt,
};

#[cfg(feature = "mongodb")]
pub use flowboard_persist::MongoFlowStore;
