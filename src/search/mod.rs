//! A* search over the layer graph.

mod astar;
mod types;

pub use astar::find_path;
pub use types::{PlannedPath, SearchConfig};
