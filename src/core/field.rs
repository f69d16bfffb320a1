//! Validated arena of obstacle circles, grouped by level.

use std::collections::BTreeMap;

use crate::error::{Result, SlalomError};

use super::{Circle, Point2D, Side};

/// The fixed set of obstacle circles, partitioned into layers by level.
///
/// Construction validates the whole field up front; a `CircleField` that
/// exists is well-formed. Circles are stored in an arena and addressed by
/// index; layers hold indices into that arena, ordered by ascending level
/// with empty levels skipped.
#[derive(Clone, Debug)]
pub struct CircleField {
    circles: Vec<Circle>,
    layers: Vec<Vec<usize>>,
}

impl CircleField {
    /// Build a field from raw circles.
    ///
    /// Fails with [`SlalomError::MalformedInput`] when any circle has a
    /// negative or non-finite radius, a non-finite center, or when the
    /// level sequence is not monotonically non-decreasing in vertical
    /// position (every circle of a higher level must sit at or below
    /// every circle of a lower level).
    pub fn new(circles: Vec<Circle>) -> Result<Self> {
        for (idx, circle) in circles.iter().enumerate() {
            if !circle.center.is_finite() || !circle.radius.is_finite() {
                return Err(SlalomError::MalformedInput(format!(
                    "circle {idx} has non-finite geometry"
                )));
            }
            if circle.radius < 0.0 {
                return Err(SlalomError::MalformedInput(format!(
                    "circle {idx} has negative radius {}",
                    circle.radius
                )));
            }
        }

        // Group by level; BTreeMap keeps levels ascending and drops the
        // empty ones implicitly.
        let mut by_level: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (idx, circle) in circles.iter().enumerate() {
            by_level.entry(circle.level).or_default().push(idx);
        }
        let layers: Vec<Vec<usize>> = by_level.into_values().collect();

        for pair in layers.windows(2) {
            let below_max = pair[0]
                .iter()
                .map(|&i| circles[i].center.y)
                .fold(f32::NEG_INFINITY, f32::max);
            let above_min = pair[1]
                .iter()
                .map(|&i| circles[i].center.y)
                .fold(f32::INFINITY, f32::min);
            if above_min < below_max {
                return Err(SlalomError::MalformedInput(format!(
                    "levels out of vertical order: y {above_min} above y {below_max}"
                )));
            }
        }

        Ok(Self { circles, layers })
    }

    /// All circles in arena order
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Circle by arena index
    #[inline]
    pub fn circle(&self, idx: usize) -> &Circle {
        &self.circles[idx]
    }

    /// Populated layers in traversal order; each entry lists arena indices
    #[inline]
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    /// Number of populated layers
    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Whether the field contains no circles
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Contact point of a circle by arena index and side
    #[inline]
    pub fn contact(&self, idx: usize, side: Side) -> Point2D {
        self.circles[idx].contact(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, r: f32, level: u32) -> Circle {
        Circle::new(Point2D::new(x, y), r, level)
    }

    #[test]
    fn test_empty_field() {
        let field = CircleField::new(Vec::new()).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.num_layers(), 0);
    }

    #[test]
    fn test_layers_skip_empty_levels() {
        let field = CircleField::new(vec![
            circle(10.0, 10.0, 5.0, 1),
            circle(20.0, 50.0, 5.0, 4),
        ])
        .unwrap();
        assert_eq!(field.num_layers(), 2);
        assert_eq!(field.layers()[0], vec![0]);
        assert_eq!(field.layers()[1], vec![1]);
    }

    #[test]
    fn test_peers_grouped() {
        let field = CircleField::new(vec![
            circle(10.0, 10.0, 5.0, 1),
            circle(40.0, 11.0, 5.0, 1),
            circle(20.0, 50.0, 5.0, 2),
        ])
        .unwrap();
        assert_eq!(field.num_layers(), 2);
        assert_eq!(field.layers()[0], vec![0, 1]);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = CircleField::new(vec![circle(10.0, 10.0, -1.0, 1)]).unwrap_err();
        assert!(matches!(err, SlalomError::MalformedInput(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = CircleField::new(vec![circle(f32::NAN, 10.0, 5.0, 1)]).unwrap_err();
        assert!(matches!(err, SlalomError::MalformedInput(_)));
    }

    #[test]
    fn test_vertical_order_rejected() {
        // Level 2 sits above level 1.
        let err = CircleField::new(vec![
            circle(10.0, 50.0, 5.0, 1),
            circle(20.0, 10.0, 5.0, 2),
        ])
        .unwrap_err();
        assert!(matches!(err, SlalomError::MalformedInput(_)));
    }

    #[test]
    fn test_equal_height_levels_allowed() {
        // Non-decreasing, not strictly increasing.
        let field = CircleField::new(vec![
            circle(10.0, 10.0, 5.0, 1),
            circle(40.0, 10.0, 5.0, 2),
        ])
        .unwrap();
        assert_eq!(field.num_layers(), 2);
    }
}
