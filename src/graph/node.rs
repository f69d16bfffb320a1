//! Graph node types.

use crate::core::{Point2D, Side};

/// Index of a node in the layer graph arena.
pub type NodeId = usize;

/// What a graph node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The start terminal (layer 0, no owning circle)
    Start,
    /// The goal terminal (last layer, no owning circle)
    Goal,
    /// A lateral contact point on a circle
    Contact {
        /// Arena index of the owning circle in the field
        circle: usize,
        /// Which side of that circle
        side: Side,
    },
}

/// A node in the layer graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphNode {
    /// Position in the plane
    pub point: Point2D,
    /// Traversal layer: 0 for start, `circle_layers + 1` for goal,
    /// `1..=circle_layers` for contacts
    pub layer: usize,
    /// Terminal or contact
    pub kind: NodeKind,
}

impl GraphNode {
    /// Whether this node is one of the two terminals
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Start | NodeKind::Goal)
    }
}
