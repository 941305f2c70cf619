pub mod models;
pub mod gateway;
pub mod store;
pub mod memory;
pub mod http;
pub mod config;
pub mod builder;
pub mod error;

#[cfg(feature = "mongodb")]
pub mod dbs;

pub use models::{FlowKey, FlowRecord, FlowSummary, SaveReceipt};
pub use gateway::PersistenceGateway;
pub use store::FlowStore;
pub use memory::InMemoryFlowStore;
pub use http::HttpFlowGateway;
pub use config::{GatewayConfig, DEFAULT_BASE_URL};
pub use builder::GatewayBuilder;
pub use error::{PersistError, Result};

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoFlowStore;
