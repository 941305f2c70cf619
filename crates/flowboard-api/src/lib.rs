//! HTTP backend for Flowboard flows.
//!
//! Serves `POST /flows`, `GET /flows`, `GET /flows/{id|latest}` and
//! `DELETE /flows/{id}` over a [`flowboard_persist::FlowStore`], validating
//! every incoming snapshot before it is stored.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::build_router;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
