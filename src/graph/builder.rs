//! Geometry builder: circle field to layer graph.

use log::debug;

use crate::core::{CircleField, Point2D, Side};
use crate::error::{Result, SlalomError};

use super::model::LayerGraph;
use super::node::{GraphNode, NodeKind};

/// Build the layer graph for a validated circle field.
///
/// Every circle contributes its two lateral contact points as nodes.
/// Adjacent layers are joined by a complete bipartite edge set weighted by
/// Euclidean distance: start to every first-layer contact, every contact of
/// layer k to every contact of layer k+1, every last-layer contact to goal.
/// Two contacts of the same circle are never joined (they sit on the same
/// layer), and no edge skips a layer. Empty levels were already dropped by
/// [`CircleField`] construction, so layers here are always populated.
///
/// With no circles at all the start connects straight to the goal.
///
/// No occlusion test is applied: an edge may geometrically cross an
/// intervening circle. See DESIGN.md for the status of that decision.
pub fn build_graph(field: &CircleField, start: Point2D, goal: Point2D) -> Result<LayerGraph> {
    if !start.is_finite() || !goal.is_finite() {
        return Err(SlalomError::MalformedInput(
            "start or goal coordinate is non-finite".into(),
        ));
    }

    let circle_layers = field.num_layers();
    let node_count = 2 + 2 * field.circles().len();
    let mut graph = LayerGraph::with_capacity(node_count);

    let start_id = graph.add_node(GraphNode {
        point: start,
        layer: 0,
        kind: NodeKind::Start,
    });

    // Previous layer's node ids; seeds the bipartite join for layer 1.
    let mut previous = vec![start_id];

    for (layer_idx, layer) in field.layers().iter().enumerate() {
        let mut current = Vec::with_capacity(layer.len() * 2);
        for &circle_idx in layer {
            for side in Side::BOTH {
                let id = graph.add_node(GraphNode {
                    point: field.contact(circle_idx, side),
                    layer: layer_idx + 1,
                    kind: NodeKind::Contact {
                        circle: circle_idx,
                        side,
                    },
                });
                current.push(id);
            }
        }

        for &from in &previous {
            let from_point = graph.node(from).point;
            for &to in &current {
                let weight = from_point.distance(&graph.node(to).point);
                graph.add_edge(from, to, weight);
            }
        }
        previous = current;
    }

    let goal_id = graph.add_node(GraphNode {
        point: goal,
        layer: circle_layers + 1,
        kind: NodeKind::Goal,
    });
    for &from in &previous {
        let weight = graph.node(from).point.distance(&goal);
        graph.add_edge(from, goal_id, weight);
    }

    graph.set_terminals(start_id, goal_id);

    debug!(
        "[Builder] graph built: {} layers, {} nodes, {} edges",
        circle_layers,
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Circle;

    fn field(circles: Vec<Circle>) -> CircleField {
        CircleField::new(circles).unwrap()
    }

    fn circle(x: f32, y: f32, r: f32, level: u32) -> Circle {
        Circle::new(Point2D::new(x, y), r, level)
    }

    #[test]
    fn test_single_circle_graph() {
        let f = field(vec![circle(10.0, 10.0, 5.0, 1)]);
        let g = build_graph(&f, Point2D::new(10.0, 0.0), Point2D::new(10.0, 20.0)).unwrap();

        // start + two contacts + goal
        assert_eq!(g.node_count(), 4);
        // start to each contact, each contact to goal
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.circle_layers(), 1);
    }

    #[test]
    fn test_no_same_circle_edges() {
        let f = field(vec![circle(10.0, 10.0, 5.0, 1), circle(40.0, 10.0, 5.0, 1)]);
        let g = build_graph(&f, Point2D::new(0.0, 0.0), Point2D::new(0.0, 20.0)).unwrap();

        for id in 0..g.node_count() {
            let node = g.node(id);
            for &(nbr, _) in g.neighbors(id) {
                let other = g.node(nbr);
                if let (
                    NodeKind::Contact { circle: a, .. },
                    NodeKind::Contact { circle: b, .. },
                ) = (node.kind, other.kind)
                {
                    assert_ne!(a, b, "contacts of circle {a} are joined");
                }
            }
        }
    }

    #[test]
    fn test_edges_join_adjacent_layers_only() {
        let f = field(vec![
            circle(10.0, 10.0, 5.0, 1),
            circle(20.0, 50.0, 5.0, 2),
            circle(30.0, 90.0, 5.0, 3),
        ]);
        let g = build_graph(&f, Point2D::new(0.0, 0.0), Point2D::new(0.0, 100.0)).unwrap();

        for id in 0..g.node_count() {
            for &(nbr, _) in g.neighbors(id) {
                let delta = g.node(id).layer.abs_diff(g.node(nbr).layer);
                assert_eq!(delta, 1, "edge {id}->{nbr} spans {delta} layers");
            }
        }
    }

    #[test]
    fn test_bipartite_edge_counts() {
        // Two circles per layer, two layers: 1*4 + 4*4 + 4*1 edges.
        let f = field(vec![
            circle(10.0, 10.0, 5.0, 1),
            circle(40.0, 10.0, 5.0, 1),
            circle(10.0, 50.0, 5.0, 2),
            circle(40.0, 50.0, 5.0, 2),
        ]);
        let g = build_graph(&f, Point2D::new(0.0, 0.0), Point2D::new(0.0, 60.0)).unwrap();
        assert_eq!(g.edge_count(), 24);
    }

    #[test]
    fn test_empty_field_connects_terminals() {
        let f = field(Vec::new());
        let g = build_graph(&f, Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0)).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        let (nbr, w) = g.neighbors(g.start())[0];
        assert!(g.is_goal(nbr));
        assert!((w - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_edge_weights_are_euclidean() {
        let f = field(vec![circle(10.0, 10.0, 5.0, 1)]);
        let g = build_graph(&f, Point2D::new(10.0, 0.0), Point2D::new(10.0, 20.0)).unwrap();

        // Start to either contact: sqrt(5^2 + 10^2).
        let expected = 125.0f32.sqrt();
        for &(_, w) in g.neighbors(g.start()) {
            assert!((w - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_non_finite_terminal_rejected() {
        let f = field(Vec::new());
        let err = build_graph(&f, Point2D::new(f32::NAN, 0.0), Point2D::ZERO).unwrap_err();
        assert!(matches!(err, SlalomError::MalformedInput(_)));
    }
}
