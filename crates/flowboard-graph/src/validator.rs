//! Structural validation of graph snapshots.
//!
//! Checks run in a fixed order: collection presence, then every node, then every
//! edge against the id set of *all* nodes (including invalid ones). Nothing
//! short-circuits past the collection check, so one report carries every
//! violation found.

use flowboard_types::GraphSnapshot;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingNodes,
    MissingEdges,
    NodeMissingId,
    NodeMissingData,
    EdgeMissingId,
    EdgeMissingSource,
    EdgeMissingTarget,
    DanglingSource,
    DanglingTarget,
    DuplicateNodeId,
    DuplicateEdgeId,
}

/// One structural problem, with the offending entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Id of the offending node or edge, `None` when it has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Position within `nodes` or `edges`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Node id an edge points at, for dangling references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Violation {
    fn collection(kind: ViolationKind) -> Self {
        Self {
            kind,
            entity_id: None,
            index: None,
            reference: None,
        }
    }

    fn entity(kind: ViolationKind, index: usize, id: &str) -> Self {
        Self {
            kind,
            entity_id: (!id.is_empty()).then(|| id.to_string()),
            index: Some(index),
            reference: None,
        }
    }

    fn dangling(kind: ViolationKind, index: usize, id: &str, node_id: &str) -> Self {
        Self {
            reference: Some(node_id.to_string()),
            ..Self::entity(kind, index, id)
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index.unwrap_or_default();
        let id = self.entity_id.as_deref().unwrap_or("<none>");
        let reference = self.reference.as_deref().unwrap_or_default();
        match self.kind {
            ViolationKind::MissingNodes => write!(f, "Flow is missing nodes"),
            ViolationKind::MissingEdges => write!(f, "Flow is missing edges"),
            ViolationKind::NodeMissingId => write!(f, "Node at index {} is missing an 'id'", index),
            ViolationKind::NodeMissingData => {
                write!(f, "Node {} at index {} is missing 'data'", id, index)
            }
            ViolationKind::EdgeMissingId => write!(f, "Edge at index {} is missing an 'id'", index),
            ViolationKind::EdgeMissingSource => {
                write!(f, "Edge {} at index {} is missing a 'source'", id, index)
            }
            ViolationKind::EdgeMissingTarget => {
                write!(f, "Edge {} at index {} is missing a 'target'", id, index)
            }
            ViolationKind::DanglingSource => {
                write!(f, "Edge {} references non-existent source node: {}", id, reference)
            }
            ViolationKind::DanglingTarget => {
                write!(f, "Edge {} references non-existent target node: {}", id, reference)
            }
            ViolationKind::DuplicateNodeId => write!(f, "Duplicate node ID: {}", id),
            ViolationKind::DuplicateEdgeId => write!(f, "Duplicate edge ID: {}", id),
        }
    }
}

/// Outcome of validating a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    /// Human readable reasons, one per violation
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(Violation::to_string).collect()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

/// A snapshot failed validation; carries every violation found
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Flow validation failed: {}", join_reasons(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn join_reasons(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pure structural checker for graph snapshots
///
/// The default rule set only checks identity, payload presence and edge
/// endpoints. [`GraphValidator::strict`] also rejects duplicate node and edge
/// ids, matching what the flows backend accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphValidator {
    reject_duplicate_ids: bool,
}

impl GraphValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            reject_duplicate_ids: true,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.reject_duplicate_ids
    }

    pub fn validate(&self, snapshot: &GraphSnapshot) -> ValidationReport {
        let mut violations = Vec::new();

        let (nodes, edges) = match (&snapshot.nodes, &snapshot.edges) {
            (Some(nodes), Some(edges)) => (nodes, edges),
            (nodes, edges) => {
                if nodes.is_none() {
                    violations.push(Violation::collection(ViolationKind::MissingNodes));
                }
                if edges.is_none() {
                    violations.push(Violation::collection(ViolationKind::MissingEdges));
                }
                return ValidationReport { violations };
            }
        };

        let mut seen_nodes = HashSet::new();
        for (index, node) in nodes.iter().enumerate() {
            if node.id.is_empty() {
                violations.push(Violation::entity(ViolationKind::NodeMissingId, index, &node.id));
            } else if self.reject_duplicate_ids && !seen_nodes.insert(node.id.as_str()) {
                violations.push(Violation::entity(ViolationKind::DuplicateNodeId, index, &node.id));
            }
            if node.data.is_none() {
                violations.push(Violation::entity(ViolationKind::NodeMissingData, index, &node.id));
            }
        }

        // Every node contributes, valid or not
        let node_ids: HashSet<&str> = nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| !id.is_empty())
            .collect();

        let mut seen_edges = HashSet::new();
        for (index, edge) in edges.iter().enumerate() {
            if edge.id.is_empty() {
                violations.push(Violation::entity(ViolationKind::EdgeMissingId, index, &edge.id));
            } else if self.reject_duplicate_ids && !seen_edges.insert(edge.id.as_str()) {
                violations.push(Violation::entity(ViolationKind::DuplicateEdgeId, index, &edge.id));
            }

            if edge.source.is_empty() {
                violations.push(Violation::entity(ViolationKind::EdgeMissingSource, index, &edge.id));
            } else if !node_ids.contains(edge.source.as_str()) {
                violations.push(Violation::dangling(
                    ViolationKind::DanglingSource,
                    index,
                    &edge.id,
                    &edge.source,
                ));
            }

            if edge.target.is_empty() {
                violations.push(Violation::entity(ViolationKind::EdgeMissingTarget, index, &edge.id));
            } else if !node_ids.contains(edge.target.as_str()) {
                violations.push(Violation::dangling(
                    ViolationKind::DanglingTarget,
                    index,
                    &edge.id,
                    &edge.target,
                ));
            }
        }

        ValidationReport { violations }
    }
}

/// Validate with the default rule set
pub fn validate(snapshot: &GraphSnapshot) -> ValidationReport {
    GraphValidator::new().validate(snapshot)
}
