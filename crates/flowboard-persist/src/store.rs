use async_trait::async_trait;
use flowboard_types::GraphSnapshot;

use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::models::{FlowKey, FlowRecord, FlowSummary, SaveReceipt};

/// Record-level storage backing the flows API
///
/// Every insert creates a new record; records are never updated in place, so
/// concurrent writers cannot clobber each other. `FlowKey::Latest` resolves to
/// the newest record.
#[async_trait]
pub trait FlowStore: Send + Sync {
    async fn insert(&self, data: GraphSnapshot) -> Result<FlowRecord>;

    async fn get(&self, key: &FlowKey) -> Result<FlowRecord>;

    /// Summaries, newest first
    async fn list_flows(&self) -> Result<Vec<FlowSummary>>;

    /// Delete by stored id. `FlowKey::Latest` is not resolved and yields `NotFound`.
    async fn remove(&self, key: &FlowKey) -> Result<()>;

    /// Lightweight liveness check
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

// Any store is usable directly as a gateway (server side, tests, embedded use)
#[async_trait]
impl<S> PersistenceGateway for S
where
    S: FlowStore + ?Sized,
{
    async fn save(&self, snapshot: &GraphSnapshot) -> Result<SaveReceipt> {
        let record = self.insert(snapshot.clone()).await?;
        Ok(SaveReceipt::new(record.id))
    }

    async fn load(&self, key: &FlowKey) -> Result<GraphSnapshot> {
        Ok(self.get(key).await?.data)
    }

    async fn list(&self) -> Result<Vec<FlowSummary>> {
        self.list_flows().await
    }

    async fn delete(&self, key: &FlowKey) -> Result<()> {
        self.remove(key).await
    }
}
