//! Core types for the slalom-nav planner.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Point2D`]: planar coordinate type
//! - [`Circle`] and [`Side`]: obstacle circles and their lateral contacts
//! - [`CircleField`]: validated, level-grouped circle arena

mod circle;
mod field;
mod point;

pub use circle::{Circle, Side};
pub use field::CircleField;
pub use point::Point2D;
