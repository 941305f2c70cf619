use async_trait::async_trait;
use flowboard_types::GraphSnapshot;

use crate::error::Result;
use crate::models::{FlowKey, FlowSummary, SaveReceipt};

/// Contract for moving flow snapshots to and from durable storage
///
/// Implementations perform no structural checks in either direction: callers
/// validate before `save`, and whatever `load` returns is trusted.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Store the full snapshot, returning the assigned id
    async fn save(&self, snapshot: &GraphSnapshot) -> Result<SaveReceipt>;

    /// Fetch a snapshot by key (`FlowKey::Latest` for the most recent save)
    async fn load(&self, key: &FlowKey) -> Result<GraphSnapshot>;

    /// List stored flows, newest first
    async fn list(&self) -> Result<Vec<FlowSummary>>;

    /// Remove a stored snapshot
    async fn delete(&self, key: &FlowKey) -> Result<()>;
}
