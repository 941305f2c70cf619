use async_trait::async_trait;
use flowboard_types::GraphSnapshot;
use tokio::sync::RwLock;

use crate::error::{PersistError, Result};
use crate::models::{FlowKey, FlowRecord, FlowSummary};
use crate::store::FlowStore;

/// Process-local flow store; records are kept in insertion order
#[derive(Debug, Default)]
pub struct InMemoryFlowStore {
    records: RwLock<Vec<FlowRecord>>,
}

impl InMemoryFlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn position_of(records: &[FlowRecord], key: &FlowKey) -> Option<usize> {
    match key {
        FlowKey::Latest => records.len().checked_sub(1),
        FlowKey::Id(id) => records.iter().position(|r| &r.id == id),
    }
}

#[async_trait]
impl FlowStore for InMemoryFlowStore {
    async fn insert(&self, data: GraphSnapshot) -> Result<FlowRecord> {
        let record = FlowRecord::new(data);
        self.records.write().await.push(record.clone());
        tracing::debug!(flow_id = %record.id, "Stored flow in memory");
        Ok(record)
    }

    async fn get(&self, key: &FlowKey) -> Result<FlowRecord> {
        let records = self.records.read().await;
        position_of(&records, key)
            .map(|idx| records[idx].clone())
            .ok_or_else(|| PersistError::NotFound(key.to_string()))
    }

    async fn list_flows(&self) -> Result<Vec<FlowSummary>> {
        let records = self.records.read().await;
        Ok(records.iter().rev().map(FlowRecord::summary).collect())
    }

    // Deletes match a stored id only; `latest` is never an alias here
    async fn remove(&self, key: &FlowKey) -> Result<()> {
        let mut records = self.records.write().await;
        let idx = records
            .iter()
            .position(|r| r.id == key.as_str())
            .ok_or_else(|| PersistError::NotFound(key.to_string()))?;
        let removed = records.remove(idx);
        tracing::debug!(flow_id = %removed.id, "Removed flow from memory");
        Ok(())
    }
}
