use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::NodeCategory;
use crate::de::null_as_empty;

/// Renderer key the canvas uses for entry-point nodes
pub const DEFAULT_RENDERER: &str = "customNode";

/// Canvas coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Payload rendered inside a node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Semantic category string, e.g. `"frontend"`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeData {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(&self) -> NodeCategory {
        NodeCategory::from_type(self.kind.as_deref().unwrap_or_default())
    }
}

/// A node on the canvas.
///
/// `id` and `data` are the structural fields. An empty `id` means "not yet
/// assigned" when handed to the graph model and "missing" when validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// Renderer key (`"customNode"`), distinct from the semantic `data.type`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
    #[serde(default)]
    pub data: Option<NodeData>,
    #[serde(default)]
    pub position: Position,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>, data: NodeData) -> Self {
        Self {
            id: id.into(),
            renderer: Some(DEFAULT_RENDERER.to_string()),
            data: Some(data),
            position: Position::default(),
            extra: Map::new(),
        }
    }

    /// Node without an id; the graph model assigns one on insert
    pub fn unassigned(data: NodeData) -> Self {
        Self::new(String::new(), data)
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.label.as_str())
    }

    pub fn category(&self) -> NodeCategory {
        self.data.as_ref().map(NodeData::category).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_data_object_is_present() {
        let node: Node = serde_json::from_value(json!({"id": "1", "data": {}})).unwrap();
        assert_eq!(node.id, "1");
        assert!(node.data.is_some());
    }

    #[test]
    fn test_missing_and_null_data() {
        let missing: Node = serde_json::from_value(json!({"id": "1"})).unwrap();
        let null: Node = serde_json::from_value(json!({"id": "1", "data": null})).unwrap();
        assert!(missing.data.is_none());
        assert!(null.data.is_none());
    }

    #[test]
    fn test_null_id_reads_as_missing() {
        let node: Node =
            serde_json::from_value(json!({"id": null, "data": {"label": null}})).unwrap();
        assert!(node.id.is_empty());
        assert_eq!(node.label(), Some(""));
    }

    #[test]
    fn test_renderer_and_semantic_type_are_separate() {
        let node: Node = serde_json::from_value(json!({
            "id": "2",
            "type": "customNode",
            "data": {"label": "Backend Entry Point", "type": "backend"},
            "position": {"x": 250.0, "y": 200.0}
        }))
        .unwrap();

        assert_eq!(node.renderer.as_deref(), Some("customNode"));
        assert_eq!(node.category(), NodeCategory::Backend);
        assert_eq!(node.label(), Some("Backend Entry Point"));
        assert_eq!(node.position, Position::new(250.0, 200.0));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let value = json!({
            "id": "1",
            "data": {"label": "A", "color": "red"},
            "position": {"x": 1.0, "y": 2.0},
            "width": 150,
            "selected": true
        });
        let node: Node = serde_json::from_value(value).unwrap();
        assert_eq!(node.extra.get("width"), Some(&json!(150)));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["selected"], json!(true));
        assert_eq!(back["data"]["color"], json!("red"));
    }
}
