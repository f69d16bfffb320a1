//! A* search over the layer graph.

use log::{debug, trace};
use std::collections::BinaryHeap;

use crate::error::{Result, SlalomError};
use crate::graph::{LayerGraph, NodeId, NodeKind};

use super::types::{FrontierEntry, PlannedPath, SearchConfig};

/// Find the minimum-distance start-to-goal route through the graph.
///
/// Classic A*: g is the summed Euclidean edge cost of the best route found
/// so far, h is the number of circle layers still to cross (admissible and
/// consistent, every edge weight is non-negative), and the frontier pops
/// ascending f with ties broken by lower g and then insertion order, so
/// identical inputs always yield identical routes.
///
/// Returns [`SlalomError::NoPathFound`] if the frontier empties before the
/// goal is popped, which a well-formed field cannot produce, or if the
/// expansion cap is exceeded.
pub fn find_path(graph: &LayerGraph, config: &SearchConfig) -> Result<PlannedPath> {
    let start = graph.start();
    trace!(
        "[AStar] find_path: {} nodes, {} circle layers",
        graph.node_count(),
        graph.circle_layers()
    );

    // Arena-indexed bookkeeping; discarded when the search returns.
    let mut g_scores = vec![f32::INFINITY; graph.node_count()];
    let mut came_from: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let mut closed = vec![false; graph.node_count()];

    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;
    g_scores[start] = 0.0;
    open.push(FrontierEntry {
        node: start,
        g_cost: 0.0,
        f_cost: graph.layers_remaining(start) as f32,
        seq,
    });

    let mut nodes_expanded = 0;

    while let Some(current) = open.pop() {
        if closed[current.node] {
            continue; // Stale duplicate entry
        }

        nodes_expanded += 1;
        if nodes_expanded > config.max_expansions {
            debug!(
                "[AStar] FAILED: expansion cap {} exceeded",
                config.max_expansions
            );
            return Err(SlalomError::NoPathFound);
        }

        if graph.is_goal(current.node) {
            return Ok(reconstruct_path(graph, &came_from, current.g_cost, nodes_expanded));
        }
        closed[current.node] = true;

        for &(neighbor, weight) in graph.neighbors(current.node) {
            if closed[neighbor] {
                continue;
            }

            let tentative_g = g_scores[current.node] + weight;
            if tentative_g < g_scores[neighbor] {
                came_from[neighbor] = Some(current.node);
                g_scores[neighbor] = tentative_g;

                let h = graph.layers_remaining(neighbor) as f32;
                seq += 1;
                open.push(FrontierEntry {
                    node: neighbor,
                    g_cost: tentative_g,
                    f_cost: tentative_g + h,
                    seq,
                });
            }
        }
    }

    debug!(
        "[AStar] FAILED: frontier empty after expanding {} nodes",
        nodes_expanded
    );
    Err(SlalomError::NoPathFound)
}

/// Walk predecessor links back from the goal and reverse.
fn reconstruct_path(
    graph: &LayerGraph,
    came_from: &[Option<NodeId>],
    cost: f32,
    nodes_expanded: usize,
) -> PlannedPath {
    let mut ids = Vec::with_capacity(graph.circle_layers() + 2);
    let mut current = graph.goal();
    ids.push(current);
    while let Some(prev) = came_from[current] {
        ids.push(prev);
        current = prev;
    }
    ids.reverse();

    let points = ids.iter().map(|&id| graph.node(id).point).collect();
    let contacts = ids
        .iter()
        .filter_map(|&id| match graph.node(id).kind {
            NodeKind::Contact { circle, side } => Some((circle, side)),
            _ => None,
        })
        .collect();

    trace!(
        "[AStar] SUCCESS: {} waypoints, cost={:.2}, nodes_expanded={}",
        ids.len(),
        cost,
        nodes_expanded
    );

    PlannedPath {
        points,
        contacts,
        cost,
        nodes_expanded,
    }
}
