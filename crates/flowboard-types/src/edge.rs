use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::de::null_as_empty;

/// Directed connection between two nodes, referenced by node id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub target: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            extra: Map::new(),
        }
    }

    /// Check if this edge touches a node
    pub fn involves_node(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_endpoints_read_as_missing() {
        let edge: Edge =
            serde_json::from_value(json!({"id": "e1", "source": null, "target": null})).unwrap();
        assert_eq!(edge.id, "e1");
        assert!(edge.source.is_empty());
        assert!(edge.target.is_empty());
    }

    #[test]
    fn test_non_string_id_is_rejected() {
        let result = serde_json::from_value::<Edge>(json!({"id": 7, "source": "1", "target": "2"}));
        assert!(result.is_err());
    }
}
