use anyhow::{anyhow, Result};
use flowboard_persist::PersistenceGateway;
use flowboard_types::GraphSnapshot;
use std::sync::Arc;

use crate::id::IdGenerator;
use crate::model::GraphModel;
use crate::session::EditorSession;
use crate::validator::GraphValidator;

/// Builder for constructing an [`EditorSession`]
pub struct SessionBuilder {
    gateway: Option<Arc<dyn PersistenceGateway>>,
    validator: GraphValidator,
    id_generator: Option<Arc<dyn IdGenerator>>,
    initial: Option<GraphSnapshot>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            gateway: None,
            validator: GraphValidator::default(),
            id_generator: None,
            initial: None,
        }
    }

    /// Set the persistence gateway
    pub fn gateway(mut self, gateway: Arc<dyn PersistenceGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn validator(mut self, validator: GraphValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Use duplicate-id checks before saving
    pub fn strict(self) -> Self {
        self.validator(GraphValidator::strict())
    }

    pub fn id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    /// Start from this graph instead of an empty canvas
    pub fn initial_snapshot(mut self, snapshot: GraphSnapshot) -> Self {
        self.initial = Some(snapshot);
        self
    }

    /// Build the session
    pub fn build(self) -> Result<EditorSession> {
        let gateway = self
            .gateway
            .ok_or_else(|| anyhow!("Persistence gateway is required"))?;

        let mut model = match self.id_generator {
            Some(id_generator) => GraphModel::with_id_generator(id_generator),
            None => GraphModel::new(),
        };
        if let Some(snapshot) = self.initial {
            model.load_snapshot(snapshot);
        }

        Ok(EditorSession::new(model, gateway, self.validator))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
