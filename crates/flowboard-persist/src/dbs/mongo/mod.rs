mod client;
mod models;

pub use client::MongoFlowStore;
pub use models::MongoFlow;
