use chrono::{DateTime, Utc};
use flowboard_types::GraphSnapshot;
use serde::{Deserialize, Serialize};

/// A stored flow snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowRecord {
    pub id: String,
    pub data: GraphSnapshot,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FlowRecord {
    /// Wrap a snapshot in a new record with a fresh uuid
    pub fn new(data: GraphSnapshot) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            data,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn summary(&self) -> FlowSummary {
        FlowSummary {
            id: self.id.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing entry for a stored flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned by a successful save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

impl SaveReceipt {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: "Flow saved successfully".to_string(),
        }
    }
}
