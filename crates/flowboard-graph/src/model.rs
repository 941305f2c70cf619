//! In-memory working set of an editing session.

use flowboard_types::{Edge, GraphSnapshot, Node, NodeData, Position, Viewport};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use crate::error::{GraphError, Result};
use crate::id::{IdGenerator, RandomIdGenerator};

/// Nodes and edges of the graph being edited.
///
/// The model keeps ids unique on every insert but does not enforce referential
/// integrity: edges may point at missing nodes, and removing a node leaves its
/// edges in place. Use [`crate::GraphValidator`] before the graph leaves the
/// session.
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    viewport: Option<Value>,
    extra: Map<String, Value>,
    id_generator: Arc<dyn IdGenerator>,
    revision: u64,
}

impl GraphModel {
    /// Create an empty graph with random ids
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(RandomIdGenerator::new()))
    }

    pub fn with_id_generator(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            viewport: None,
            extra: Map::new(),
            id_generator,
            revision: 0,
        }
    }

    /// Graph shown on a fresh canvas
    pub fn starter() -> Self {
        let mut model = Self::new();
        model.load_snapshot(starter_snapshot());
        model
    }

    /// Monotonic counter bumped by every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // Nodes

    /// Insert a node, assigning a generated id when `node.id` is empty
    pub fn add_node(&mut self, mut node: Node) -> Result<String> {
        if node.id.is_empty() {
            node.id = self.id_generator.next_id();
        }
        if self.contains_node(&node.id) {
            return Err(GraphError::DuplicateNodeId(node.id));
        }

        let id = node.id.clone();
        self.nodes.push(node);
        self.touch();
        tracing::debug!(node_id = %id, "Node added");
        Ok(id)
    }

    /// Drop-to-create: a `"{kind} node"` of the given semantic type
    pub fn create_node(&mut self, kind: &str, position: Position) -> Result<String> {
        let data = NodeData::new(format!("{} node", kind)).with_kind(kind);
        let mut node = Node::unassigned(data);
        node.position = position;
        self.add_node(node)
    }

    /// Remove a node by id. Incident edges are kept and may dangle.
    pub fn remove_node(&mut self, node_id: &str) -> Result<Node> {
        let idx = self
            .nodes
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()))?;

        let node = self.nodes.remove(idx);
        self.touch();
        tracing::debug!(node_id = %node_id, "Node removed");
        Ok(node)
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Mutate a node in place. The id cannot be changed.
    pub fn update_node<F>(&mut self, node_id: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Node),
    {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()))?;

        let id = std::mem::take(&mut node.id);
        f(node);
        node.id = id;
        self.touch();
        Ok(())
    }

    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<()> {
        self.update_node(node_id, |node| node.position = position)
    }

    pub fn set_label(&mut self, node_id: &str, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        self.update_node(node_id, |node| match node.data.as_mut() {
            Some(data) => data.label = label,
            None => node.data = Some(NodeData::new(label)),
        })
    }

    // Edges

    /// Insert an edge, assigning a generated id when `edge.id` is empty.
    ///
    /// Endpoints are not checked against existing nodes.
    pub fn add_edge(&mut self, mut edge: Edge) -> Result<String> {
        if edge.id.is_empty() {
            edge.id = self.id_generator.next_id();
        }
        if self.contains_edge(&edge.id) {
            return Err(GraphError::DuplicateEdgeId(edge.id));
        }

        let id = edge.id.clone();
        tracing::debug!(edge_id = %id, source = %edge.source, target = %edge.target, "Edge added");
        self.edges.push(edge);
        self.touch();
        Ok(id)
    }

    /// Connect-to-create
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String> {
        self.add_edge(Edge::new(String::new(), source, target))
    }

    pub fn remove_edge(&mut self, edge_id: &str) -> Result<Edge> {
        let idx = self
            .edges
            .iter()
            .position(|e| e.id == edge_id)
            .ok_or_else(|| GraphError::EdgeNotFound(edge_id.to_string()))?;

        let edge = self.edges.remove(idx);
        self.touch();
        tracing::debug!(edge_id = %edge_id, "Edge removed");
        Ok(edge)
    }

    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    pub fn contains_edge(&self, edge_id: &str) -> bool {
        self.edge(edge_id).is_some()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges with `node_id` as source or target
    pub fn incident_edges<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.involves_node(node_id))
    }

    /// Edges whose source or target is not a node in the graph
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| !self.contains_node(&e.source) || !self.contains_node(&e.target))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    // Viewport

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = serde_json::to_value(viewport).ok();
        self.touch();
    }

    // Snapshots

    /// Export the current state
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: Some(self.nodes.clone()),
            edges: Some(self.edges.clone()),
            viewport: self.viewport.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Replace the whole working set with `snapshot`.
    ///
    /// No validation happens here; absent collections load as empty.
    pub fn load_snapshot(&mut self, snapshot: GraphSnapshot) {
        let GraphSnapshot {
            nodes,
            edges,
            viewport,
            extra,
        } = snapshot;

        self.nodes = nodes.unwrap_or_default();
        self.edges = edges.unwrap_or_default();
        self.viewport = viewport;
        self.extra = extra;
        self.touch();

        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "Snapshot loaded"
        );
    }

    pub fn clear(&mut self) {
        self.load_snapshot(GraphSnapshot::empty());
    }
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GraphModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphModel")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("viewport", &self.viewport)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

/// Two entry points joined by `e1-2`
pub fn starter_snapshot() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            Node::new("1", NodeData::new("Frontend Entry Point").with_kind("frontend"))
                .with_position(250.0, 5.0),
            Node::new("2", NodeData::new("Backend Entry Point").with_kind("backend"))
                .with_position(250.0, 200.0),
        ],
        vec![Edge::new("e1-2", "1", "2")],
    )
}
