use async_trait::async_trait;
use flowboard_types::GraphSnapshot;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection, Database};

use super::models::MongoFlow;
use crate::error::{PersistError, Result};
use crate::models::{FlowKey, FlowRecord, FlowSummary};
use crate::store::FlowStore;

const FLOWS_COLLECTION: &str = "flows";

pub struct MongoFlowStore {
    database: Database,
    collection: Collection<MongoFlow>,
}

impl MongoFlowStore {
    /// Connect to MongoDB and open the flows collection
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let database = client.database(database);
        let collection = database.collection(FLOWS_COLLECTION);

        Ok(Self {
            database,
            collection,
        })
    }

    async fn find(&self, key: &FlowKey) -> Result<Option<MongoFlow>> {
        let flow = match key {
            FlowKey::Latest => {
                self.collection
                    .find_one(doc! {})
                    .sort(doc! { "created_at": -1 })
                    .await?
            }
            FlowKey::Id(id) => self.collection.find_one(doc! { "_id": id.as_str() }).await?,
        };
        Ok(flow)
    }
}

#[async_trait]
impl FlowStore for MongoFlowStore {
    async fn insert(&self, data: GraphSnapshot) -> Result<FlowRecord> {
        let record = FlowRecord::new(data);
        let document = MongoFlow::try_from(&record)?;
        self.collection.insert_one(&document).await?;

        tracing::debug!(flow_id = %record.id, "Stored flow in MongoDB");
        Ok(record)
    }

    async fn get(&self, key: &FlowKey) -> Result<FlowRecord> {
        let flow = self
            .find(key)
            .await?
            .ok_or_else(|| PersistError::NotFound(key.to_string()))?;
        flow.try_into()
    }

    async fn list_flows(&self) -> Result<Vec<FlowSummary>> {
        let flows: Vec<MongoFlow> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;

        Ok(flows
            .into_iter()
            .map(|f| FlowSummary {
                id: f.id,
                created_at: f.created_at,
            })
            .collect())
    }

    // Deletes match a stored id only; `latest` is never an alias here
    async fn remove(&self, key: &FlowKey) -> Result<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": key.as_str() })
            .await?;
        if result.deleted_count == 0 {
            return Err(PersistError::NotFound(key.to_string()));
        }

        tracing::debug!(flow_id = %key, "Removed flow from MongoDB");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
