//! Editor session: one graph model wired to a persistence gateway.

use flowboard_persist::{FlowKey, FlowSummary, PersistenceGateway, SaveReceipt};
use flowboard_types::GraphSnapshot;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::builder::SessionBuilder;
use crate::error::SessionError;
use crate::model::GraphModel;
use crate::validator::{GraphValidator, ValidationReport};

/// Revision of the model that matches what storage holds
#[derive(Debug, Clone)]
struct SavedState {
    flow_id: Option<String>,
    revision: u64,
}

struct SessionState {
    model: GraphModel,
    saved: Option<SavedState>,
}

/// Owns the working graph and drives save/load through a gateway.
///
/// At most one save or load runs at a time; a second request while one is in
/// flight fails with [`SessionError::Busy`] instead of queueing. Saves validate
/// first and never reach the gateway with an invalid graph. A failed load
/// leaves the working graph untouched.
pub struct EditorSession {
    state: RwLock<SessionState>,
    gateway: Arc<dyn PersistenceGateway>,
    validator: GraphValidator,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the operation finishes, however it ends
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl EditorSession {
    pub fn new(
        model: GraphModel,
        gateway: Arc<dyn PersistenceGateway>,
        validator: GraphValidator,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState { model, saved: None }),
            gateway,
            validator,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Apply an edit to the working graph
    pub async fn edit<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut GraphModel) -> R,
    {
        let mut state = self.state.write().await;
        f(&mut state.model)
    }

    /// Read from the working graph
    pub async fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&GraphModel) -> R,
    {
        let state = self.state.read().await;
        f(&state.model)
    }

    pub async fn snapshot(&self) -> GraphSnapshot {
        self.read(GraphModel::to_snapshot).await
    }

    pub async fn validate(&self) -> ValidationReport {
        let snapshot = self.snapshot().await;
        self.validator.validate(&snapshot)
    }

    /// Validate the working graph and store it as a new flow.
    ///
    /// Edits made while the request is in flight are kept but not marked as
    /// saved.
    pub async fn save(&self) -> Result<SaveReceipt, SessionError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let (snapshot, revision) = {
            let state = self.state.read().await;
            (state.model.to_snapshot(), state.model.revision())
        };

        if let Err(e) = self.validator.validate(&snapshot).into_result() {
            tracing::warn!(violations = e.violations.len(), "Refusing to save invalid flow");
            return Err(e.into());
        }

        let receipt = self.gateway.save(&snapshot).await?;

        self.state.write().await.saved = Some(SavedState {
            flow_id: Some(receipt.id.clone()),
            revision,
        });
        tracing::info!(flow_id = %receipt.id, nodes = snapshot.node_count(), "Session saved");
        Ok(receipt)
    }

    /// Replace the working graph with a stored flow
    pub async fn load(&self, key: &FlowKey) -> Result<(), SessionError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let snapshot = match self.gateway.load(key).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Load failed, keeping working graph");
                return Err(e.into());
            }
        };

        let mut state = self.state.write().await;
        state.model.load_snapshot(snapshot);
        state.saved = Some(SavedState {
            flow_id: match key {
                FlowKey::Id(id) => Some(id.clone()),
                FlowKey::Latest => None,
            },
            revision: state.model.revision(),
        });
        tracing::info!(key = %key, nodes = state.model.node_count(), "Session loaded");
        Ok(())
    }

    pub async fn load_latest(&self) -> Result<(), SessionError> {
        self.load(&FlowKey::Latest).await
    }

    pub async fn list_flows(&self) -> Result<Vec<FlowSummary>, SessionError> {
        Ok(self.gateway.list().await?)
    }

    pub async fn delete_flow(&self, key: &FlowKey) -> Result<(), SessionError> {
        Ok(self.gateway.delete(key).await?)
    }

    /// True when the working graph matches the last save or load
    pub async fn is_saved(&self) -> bool {
        let state = self.state.read().await;
        state
            .saved
            .as_ref()
            .is_some_and(|saved| saved.revision == state.model.revision())
    }

    /// Id of the flow last saved, or loaded by id
    pub async fn last_saved_id(&self) -> Option<String> {
        let state = self.state.read().await;
        state.saved.as_ref().and_then(|saved| saved.flow_id.clone())
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn validator(&self) -> &GraphValidator {
        &self.validator
    }
}
