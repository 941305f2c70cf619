use flowboard_persist::{FlowKey, GatewayConfig, HttpFlowGateway, PersistError, PersistenceGateway};
use flowboard_types::{Edge, GraphSnapshot, Node, NodeData};
use mockito::Matcher;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn gateway_for(server: &mockito::ServerGuard) -> HttpFlowGateway {
    HttpFlowGateway::new(
        GatewayConfig::new(server.url())
            .with_max_retries(0)
            .with_timeout_ms(2_000),
    )
    .unwrap()
}

fn sample_flow() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            Node::new("1", NodeData::new("Frontend Entry Point").with_kind("frontend")),
            Node::new("2", NodeData::new("Backend Entry Point").with_kind("backend")),
        ],
        vec![Edge::new("e1-2", "1", "2")],
    )
}

#[tokio::test]
async fn test_save_posts_snapshot() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/flows")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""id":"e1-2""#.to_string()),
            Matcher::Regex(r#""source":"1","target":"2""#.to_string()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "flow-42", "message": "Flow saved successfully"}"#)
        .create_async()
        .await;

    let receipt = gateway_for(&server).save(&sample_flow()).await.unwrap();

    assert_eq!(receipt.id, "flow-42");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_load_latest_reads_record_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/flows/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "flow-42",
                "data": {"nodes": [{"id": "1", "data": {"label": "A"}}], "edges": []},
                "created_at": "2026-10-19T10:00:00Z",
                "updated_at": "2026-10-19T10:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let snapshot = gateway_for(&server).load(&FlowKey::Latest).await.unwrap();

    assert_eq!(snapshot.node_count(), 1);
    assert_eq!(snapshot.nodes()[0].label(), Some("A"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_load_accepts_bare_snapshot() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/flows/abc")
        .with_status(200)
        .with_body(r#"{"nodes": [], "edges": [], "viewport": {"x": 0, "y": 0, "zoom": 1}}"#)
        .create_async()
        .await;

    let snapshot = gateway_for(&server).load(&FlowKey::id("abc")).await.unwrap();

    assert!(snapshot.has_collections());
    assert!(snapshot.viewport().is_some());
}

#[tokio::test]
async fn test_record_with_broken_data_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/flows/latest")
        .with_status(200)
        .with_body(
            json!({
                "id": "f1",
                "data": {"nodes": [{"id": 1, "data": {}}], "edges": []},
                "created_at": "2026-10-19T10:00:00Z",
                "updated_at": "2026-10-19T10:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = gateway_for(&server).load(&FlowKey::Latest).await.unwrap_err();
    assert!(matches!(err, PersistError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_load_missing_flow_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/flows/nope")
        .with_status(404)
        .with_body(r#"{"error": "Flow not found: nope"}"#)
        .create_async()
        .await;

    let err = gateway_for(&server).load(&FlowKey::id("nope")).await.unwrap_err();
    assert!(matches!(err, PersistError::NotFound(ref key) if key == "nope"));
}

#[tokio::test]
async fn test_server_rejection_is_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/flows")
        .with_status(400)
        .with_body(r#"{"error": "Flow validation failed"}"#)
        .create_async()
        .await;

    let err = gateway_for(&server).save(&sample_flow()).await.unwrap_err();
    match err {
        PersistError::Server { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Flow validation failed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_flows() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/flows")
        .with_status(200)
        .with_body(
            json!([
                {"id": "b", "created_at": "2026-10-19T11:00:00Z"},
                {"id": "a", "created_at": "2026-10-19T10:00:00Z"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let flows = gateway_for(&server).list().await.unwrap();

    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].id, "b");
}

#[tokio::test]
async fn test_delete_flow() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/flows/abc")
        .with_status(200)
        .with_body(r#"{"message": "Flow deleted successfully"}"#)
        .create_async()
        .await;

    gateway_for(&server).delete(&FlowKey::id("abc")).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/flows")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = gateway_for(&server).list().await.unwrap_err();
    assert!(matches!(err, PersistError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let gateway = HttpFlowGateway::new(
        GatewayConfig::new("http://127.0.0.1:9")
            .with_max_retries(1)
            .with_retry_backoff_ms(10)
            .with_timeout_ms(1_000),
    )
    .unwrap();

    let err = gateway.load(&FlowKey::Latest).await.unwrap_err();
    assert!(matches!(err, PersistError::Transport(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_save_is_not_retried_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/flows")
        .with_status(503)
        .with_body(r#"{"error": "unavailable"}"#)
        .expect(1)
        .create_async()
        .await;

    let gateway = HttpFlowGateway::new(
        GatewayConfig::new(server.url())
            .with_max_retries(3)
            .with_retry_backoff_ms(10),
    )
    .unwrap();

    let err = gateway.save(&sample_flow()).await.unwrap_err();
    assert!(matches!(err, PersistError::Server { status: 503, .. }));
    mock.assert_async().await;
}

/// Accepts connections and never answers, so every request times out
async fn silent_backend() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            open.push(socket);
        }
    });

    (url, attempts)
}

#[tokio::test]
async fn test_save_is_not_retried_on_timeout() {
    let (url, attempts) = silent_backend().await;
    let gateway = HttpFlowGateway::new(
        GatewayConfig::new(url)
            .with_max_retries(2)
            .with_retry_backoff_ms(10)
            .with_timeout_ms(200),
    )
    .unwrap();

    let err = gateway.save(&sample_flow()).await.unwrap_err();
    assert!(matches!(err, PersistError::Transport(_)));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);

    // idempotent calls do retry
    gateway.load(&FlowKey::Latest).await.unwrap_err();
    assert_eq!(attempts.load(Ordering::SeqCst), 1 + 3);
}
