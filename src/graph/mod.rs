//! Layer graph construction and storage.
//!
//! The geometry builder turns a [`CircleField`](crate::core::CircleField)
//! into a [`LayerGraph`]: contact-point nodes plus the start and goal
//! terminals, joined layer to layer by complete bipartite, Euclidean-weighted
//! edges. The graph is read-only once built; the search never mutates it.

mod builder;
mod model;
mod node;

pub use builder::build_graph;
pub use model::LayerGraph;
pub use node::{GraphNode, NodeId, NodeKind};
