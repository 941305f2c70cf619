use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use flowboard_persist::{FlowKey, FlowRecord, FlowSummary, SaveReceipt};
use flowboard_types::GraphSnapshot;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Validate and store a flow snapshot
pub async fn create_flow(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GraphSnapshot>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SaveReceipt>)> {
    let Json(snapshot) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    state.validator.validate(&snapshot).into_result()?;

    let record = state.store.insert(snapshot).await?;
    tracing::info!(
        flow_id = %record.id,
        nodes = record.data.node_count(),
        edges = record.data.edge_count(),
        "Flow saved"
    );

    Ok((StatusCode::CREATED, Json(SaveReceipt::new(record.id))))
}

/// Get a flow by id or `latest`
pub async fn get_flow(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<FlowRecord>> {
    let record = state.store.get(&FlowKey::from(key)).await?;
    Ok(Json(record))
}

/// List stored flows, newest first
pub async fn list_flows(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<FlowSummary>>> {
    let flows = state.store.list_flows().await?;
    Ok(Json(flows))
}

/// Delete a flow by id
pub async fn delete_flow(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let key = FlowKey::from(key);
    state.store.remove(&key).await?;
    tracing::info!(key = %key, "Flow deleted");

    Ok(Json(MessageResponse {
        message: "Flow deleted successfully".to_string(),
    }))
}
