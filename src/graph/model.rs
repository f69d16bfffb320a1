//! Read-only adjacency model over contact points and terminals.

use super::node::{GraphNode, NodeId};

/// The layered graph the search runs on.
///
/// Stores the node arena and a symmetric adjacency list. Built once by the
/// [`builder`](super::builder) and never mutated during search. Edges only
/// join nodes on adjacent traversal layers, so walking start-to-goal the
/// structure behaves like a layered DAG even though storage is undirected.
#[derive(Clone, Debug)]
pub struct LayerGraph {
    nodes: Vec<GraphNode>,
    adjacency: Vec<Vec<(NodeId, f32)>>,
    start: NodeId,
    goal: NodeId,
}

impl LayerGraph {
    pub(super) fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            start: 0,
            goal: 0,
        }
    }

    pub(super) fn add_node(&mut self, node: GraphNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert an undirected edge; both adjacency lists are updated.
    pub(super) fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f32) {
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
    }

    pub(super) fn set_terminals(&mut self, start: NodeId, goal: NodeId) {
        self.start = start;
        self.goal = goal;
    }

    /// Node by id
    #[inline]
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id]
    }

    /// All nodes in arena order
    #[inline]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Neighbors of a node with edge weights
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, f32)] {
        &self.adjacency[id]
    }

    /// The start terminal
    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// The goal terminal
    #[inline]
    pub fn goal(&self) -> NodeId {
        self.goal
    }

    /// Whether the given node is the goal terminal
    #[inline]
    pub fn is_goal(&self, id: NodeId) -> bool {
        id == self.goal
    }

    /// Number of circle layers between the terminals
    #[inline]
    pub fn circle_layers(&self) -> usize {
        self.nodes[self.goal].layer - 1
    }

    /// Heuristic input: circle layers still to cross from this node.
    ///
    /// An integer hop count, not a distance; every remaining hop costs at
    /// least zero, so the count never overestimates.
    #[inline]
    pub fn layers_remaining(&self, id: NodeId) -> usize {
        let goal_layer = self.nodes[self.goal].layer;
        (goal_layer - 1).saturating_sub(self.nodes[id].layer)
    }

    /// Total node count
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total undirected edge count
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}
