use flowboard_graph::GraphValidator;
use flowboard_persist::FlowStore;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn FlowStore>,
    pub validator: GraphValidator,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn FlowStore>) -> Self {
        let validator = if config.validation.strict {
            GraphValidator::strict()
        } else {
            GraphValidator::new()
        };

        Self {
            config: Arc::new(config),
            store,
            validator,
        }
    }
}
