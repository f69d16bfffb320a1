//! Obstacle circles and their lateral contact points.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// Which lateral side of a circle a path grazes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// West of center: contact at `(cx - r, cy)`
    Left,
    /// East of center: contact at `(cx + r, cy)`
    Right,
}

impl Side {
    /// Both sides in canonical order (Left first)
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// The other side of the same circle
    #[inline]
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// An obstacle circle in the field.
///
/// Identity is positional: a circle is referred to by its index in the
/// owning [`CircleField`](super::CircleField). Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center coordinate
    pub center: Point2D,
    /// Radius (must be >= 0 and finite)
    pub radius: f32,
    /// Row rank in the vertical ordering; circles sharing a level are
    /// peers and are never connected to each other
    pub level: u32,
}

impl Circle {
    /// Create a new circle
    #[inline]
    pub fn new(center: Point2D, radius: f32, level: u32) -> Self {
        Self {
            center,
            radius,
            level,
        }
    }

    /// The contact point a path may touch on the given side.
    ///
    /// Travel is vertical, so the touchable extremities are the points
    /// directly west and east of center.
    #[inline]
    pub fn contact(&self, side: Side) -> Point2D {
        match side {
            Side::Left => Point2D::new(self.center.x - self.radius, self.center.y),
            Side::Right => Point2D::new(self.center.x + self.radius, self.center.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_points() {
        let c = Circle::new(Point2D::new(10.0, 10.0), 5.0, 1);
        assert_eq!(c.contact(Side::Left), Point2D::new(5.0, 10.0));
        assert_eq!(c.contact(Side::Right), Point2D::new(15.0, 10.0));
    }

    #[test]
    fn test_contacts_share_level_height() {
        let c = Circle::new(Point2D::new(-3.0, 7.5), 2.5, 4);
        assert_eq!(c.contact(Side::Left).y, c.contact(Side::Right).y);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
