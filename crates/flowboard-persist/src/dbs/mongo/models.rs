use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::models::FlowRecord;

/// MongoDB document for a stored flow
///
/// The snapshot is kept as JSON text so arbitrary canvas fields survive
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoFlow {
    #[serde(rename = "_id")]
    pub id: String,
    pub data: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<&FlowRecord> for MongoFlow {
    type Error = PersistError;

    fn try_from(record: &FlowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id.clone(),
            data: serde_json::to_string(&record.data)?,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl TryFrom<MongoFlow> for FlowRecord {
    type Error = PersistError;

    fn try_from(flow: MongoFlow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: flow.id,
            data: serde_json::from_str(&flow.data)?,
            created_at: flow.created_at,
            updated_at: flow.updated_at,
        })
    }
}
