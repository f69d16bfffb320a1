//! A* search types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{Point2D, Side};
use crate::graph::NodeId;

/// An entry in the open frontier.
///
/// Duplicate entries for one node are allowed; stale ones are skipped via
/// the closed set when popped.
#[derive(Clone, Debug)]
pub(super) struct FrontierEntry {
    pub node: NodeId,
    pub g_cost: f32, // Cost from start
    pub f_cost: f32, // g_cost + heuristic
    pub seq: u64,    // Insertion order, final FIFO tie-break
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: lowest f wins, ties go
        // to lowest g, remaining ties to earliest insertion.
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .g_cost
                    .partial_cmp(&self.g_cost)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

fn default_max_expansions() -> usize {
    100_000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: default_max_expansions(),
        }
    }
}

/// A solved route from start to goal.
#[derive(Clone, Debug)]
pub struct PlannedPath {
    /// Waypoints in traversal order: start, one contact per layer, goal
    pub points: Vec<Point2D>,
    /// Chosen contact per layer as (circle arena index, side)
    pub contacts: Vec<(usize, Side)>,
    /// Total Euclidean cost of the route
    pub cost: f32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
}

impl PlannedPath {
    /// Total Euclidean length recomputed from the waypoints
    pub fn length(&self) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }

        let mut total = 0.0;
        for i in 1..self.points.len() {
            total += self.points[i - 1].distance(&self.points[i]);
        }
        total
    }
}
