use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::edge::Edge;
use crate::node::Node;

/// Canvas pan/zoom. Stored opaquely in snapshots; this is only a typed view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_zoom() -> f64 {
    1.0
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: default_zoom(),
        }
    }
}

/// Serializable `{nodes, edges, ...}` unit exchanged between the graph model,
/// the validator and storage.
///
/// `nodes` and `edges` are `None` when the field is absent or `null`, which is a
/// malformed snapshot. An empty list is a valid empty graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Option<Vec<Node>>,
    #[serde(default)]
    pub edges: Option<Vec<Edge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes: Some(nodes),
            edges: Some(edges),
            viewport: None,
            extra: Map::new(),
        }
    }

    /// `{nodes: [], edges: []}`
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.set_viewport(viewport);
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = serde_json::to_value(viewport).ok();
    }

    /// Typed view of the viewport, `None` if absent or not shaped like one
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Nodes, treating an absent collection as empty
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_deref().unwrap_or_default()
    }

    /// Edges, treating an absent collection as empty
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_deref().unwrap_or_default()
    }

    pub fn has_collections(&self) -> bool {
        self.nodes.is_some() && self.edges.is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
