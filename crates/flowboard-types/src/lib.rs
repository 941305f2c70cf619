//! Wire and data model shared by every Flowboard crate.
//!
//! The types here mirror the JSON a canvas front end exchanges with the backend:
//! a [`GraphSnapshot`] holds ordered [`Node`]s and [`Edge`]s plus opaque pass-through
//! fields (viewport, renderer hints). Unknown fields survive a round trip.

pub mod category;
mod de;
pub mod edge;
pub mod node;
pub mod snapshot;

pub use category::{NodeCategory, NodeStyle};
pub use edge::Edge;
pub use node::{Node, NodeData, Position, DEFAULT_RENDERER};
pub use snapshot::{GraphSnapshot, Viewport};
