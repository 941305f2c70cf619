use flowboard_graph::{
    Edge, GraphError, GraphModel, GraphSnapshot, Node, NodeData, Position, SequentialIdGenerator,
    Viewport,
};
use std::sync::Arc;

#[test]
fn test_starter_graph() {
    let graph = GraphModel::starter();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node("1").and_then(|n| n.label()), Some("Frontend Entry Point"));
    assert_eq!(graph.node("2").map(|n| n.position), Some(Position::new(250.0, 200.0)));

    let edge = graph.edge("e1-2").unwrap();
    assert_eq!((edge.source.as_str(), edge.target.as_str()), ("1", "2"));
}

#[test]
fn test_duplicate_node_id_rejected() {
    let mut graph = GraphModel::starter();
    let before = graph.to_snapshot();

    let err = graph
        .add_node(Node::new("1", NodeData::new("Impostor")))
        .unwrap_err();

    assert_eq!(err, GraphError::DuplicateNodeId("1".to_string()));
    assert!(err.is_duplicate_id());
    assert_eq!(graph.to_snapshot(), before);
}

#[test]
fn test_duplicate_edge_id_rejected() {
    let mut graph = GraphModel::starter();

    let err = graph.add_edge(Edge::new("e1-2", "2", "1")).unwrap_err();
    assert_eq!(err, GraphError::DuplicateEdgeId("e1-2".to_string()));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_generated_ids_are_unique() {
    let mut graph = GraphModel::new();
    let mut ids = std::collections::HashSet::new();
    for i in 0..200 {
        let id = graph
            .create_node("util", Position::new(i as f64, 0.0))
            .unwrap();
        assert!(ids.insert(id));
    }
    assert_eq!(graph.node_count(), 200);
}

#[test]
fn test_edges_may_reference_missing_nodes() {
    let mut graph = GraphModel::new();
    let id = graph.connect("ghost", "phantom").unwrap();

    assert!(graph.contains_edge(&id));
    assert_eq!(graph.dangling_edges().len(), 1);
}

#[test]
fn test_remove_node_keeps_incident_edges() {
    let mut graph = GraphModel::starter();
    let removed = graph.remove_node("2").unwrap();

    assert_eq!(removed.id, "2");
    assert!(!graph.contains_node("2"));
    assert!(graph.contains_edge("e1-2"));
}

#[test]
fn test_remove_missing_entities() {
    let mut graph = GraphModel::starter();

    assert_eq!(
        graph.remove_node("nope").unwrap_err(),
        GraphError::NodeNotFound("nope".to_string())
    );
    assert_eq!(
        graph.remove_edge("nope").unwrap_err(),
        GraphError::EdgeNotFound("nope".to_string())
    );
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_snapshot_round_trip_preserves_everything() {
    let mut graph = GraphModel::with_id_generator(Arc::new(SequentialIdGenerator::new("n")));
    let a = graph.create_node("frontend", Position::new(0.0, 0.0)).unwrap();
    let b = graph.create_node("database", Position::new(100.0, 50.0)).unwrap();
    graph.connect(&a, &b).unwrap();
    graph.set_viewport(Viewport { x: 5.0, y: 5.0, zoom: 0.75 });

    let snapshot = graph.to_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: GraphSnapshot = serde_json::from_str(&json).unwrap();

    let mut reloaded = GraphModel::new();
    reloaded.load_snapshot(parsed);

    assert_eq!(reloaded.to_snapshot(), snapshot);
    assert_eq!(reloaded.viewport(), Some(Viewport { x: 5.0, y: 5.0, zoom: 0.75 }));
}

#[test]
fn test_load_replaces_working_set() {
    let mut graph = GraphModel::starter();
    graph.load_snapshot(GraphSnapshot::new(
        vec![Node::new("only", NodeData::new("Only"))],
        Vec::new(),
    ));

    assert_eq!(graph.node_count(), 1);
    assert!(graph.edges().is_empty());
    assert!(!graph.contains_node("1"));

    graph.clear();
    assert!(graph.is_empty());
}

#[test]
fn test_unknown_fields_survive_load() {
    let snapshot: GraphSnapshot = serde_json::from_value(serde_json::json!({
        "nodes": [{
            "id": "1",
            "type": "customNode",
            "data": {"label": "A", "type": "frontend", "owner": "web-team"},
            "position": {"x": 1, "y": 2},
            "selected": true
        }],
        "edges": [],
        "name": "checkout"
    }))
    .unwrap();

    let mut graph = GraphModel::new();
    graph.load_snapshot(snapshot.clone());

    let out = serde_json::to_value(graph.to_snapshot()).unwrap();
    assert_eq!(out["name"], "checkout");
    assert_eq!(out["nodes"][0]["selected"], true);
    assert_eq!(out["nodes"][0]["data"]["owner"], "web-team");
    assert_eq!(graph.to_snapshot(), snapshot);
}
