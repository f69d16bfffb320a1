//! # Slalom-Nav: Layered Circle-Field Path Planning
//!
//! Computes the shortest path between a start and a goal point through a
//! field of obstacle circles, where the path grazes either the left or the
//! right side of every circle it passes, moving level by level down a
//! vertical ordering.
//!
//! ## Quick Start
//!
//! ```rust
//! use slalom_nav::{solve, Circle, CircleField, Point2D};
//!
//! let field = CircleField::new(vec![
//!     Circle::new(Point2D::new(10.0, 10.0), 5.0, 1),
//! ]).unwrap();
//!
//! let path = solve(&field, Point2D::new(10.0, 0.0), Point2D::new(10.0, 20.0)).unwrap();
//! assert_eq!(path.points.len(), 3); // start, one contact, goal
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: fundamental types (Point2D, Circle, Side, CircleField)
//! - [`graph`]: geometry builder and the layered contact-point graph
//! - [`search`]: A* search with a layer-count heuristic
//! - [`scenario`]: seeded random field generation for tests and demos
//! - [`error`]: crate error type
//!
//! ## Data Flow
//!
//! ```text
//! circles ──► CircleField ──► build_graph ──► LayerGraph ──► find_path ──► PlannedPath
//!             (validation)    (contacts +                    (A*, f=g+h)   (waypoints)
//!                              layer edges)
//! ```
//!
//! Everything runs to completion on one thread; the planner holds no
//! display state and returns plain data for whatever renders it. Circle
//! generation and rendering are collaborators outside this crate's
//! planning boundary.

pub mod core;
pub mod error;
pub mod graph;
pub mod scenario;
pub mod search;

// Re-export main types at crate root
pub use crate::core::{Circle, CircleField, Point2D, Side};
pub use error::{Result, SlalomError};
pub use graph::{build_graph, LayerGraph};
pub use scenario::{Scenario, ScenarioConfig};
pub use search::{PlannedPath, SearchConfig};

/// Solve a circle field with default search settings.
///
/// The single functional boundary of the crate: build the layer graph for
/// the field and run A* from start to goal. The returned path is optimal
/// under Euclidean edge cost and visits exactly one contact point per
/// circle layer.
pub fn solve(field: &CircleField, start: Point2D, goal: Point2D) -> Result<PlannedPath> {
    solve_with_config(field, start, goal, &SearchConfig::default())
}

/// Solve with explicit search settings.
pub fn solve_with_config(
    field: &CircleField,
    start: Point2D,
    goal: Point2D,
    config: &SearchConfig,
) -> Result<PlannedPath> {
    let graph = build_graph(field, start, goal)?;
    search::find_path(&graph, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_roundtrip() {
        let field = CircleField::new(vec![Circle::new(Point2D::new(10.0, 10.0), 5.0, 1)]).unwrap();
        let path = solve(&field, Point2D::new(10.0, 0.0), Point2D::new(10.0, 20.0)).unwrap();
        assert_eq!(path.points[0], Point2D::new(10.0, 0.0));
        assert_eq!(path.points[2], Point2D::new(10.0, 20.0));
    }

    #[test]
    fn test_solve_rejects_malformed_before_search() {
        let err = CircleField::new(vec![Circle::new(Point2D::new(0.0, 0.0), -1.0, 1)]).unwrap_err();
        assert!(matches!(err, SlalomError::MalformedInput(_)));
    }
}
