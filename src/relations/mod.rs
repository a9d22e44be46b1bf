//! Character → film → starship relationship graph.

mod layout;
mod model;
mod resolve;

pub use model::{NodeKind, RelationGraph};
#[cfg(test)]
pub use model::{GraphEdge, GraphNode, Position};
pub use resolve::{GraphState, use_relation_graph};
