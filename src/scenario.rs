//! Random circle-field generation for tests, benches and demos.
//!
//! The core planner accepts any conforming circle sequence; this module is
//! one convenient producer, not part of the planning boundary. Generation
//! is seeded, so a scenario is reproducible from its config plus seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{Circle, CircleField, Point2D};
use crate::error::{Result, SlalomError};

/// Scenario generation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of circles (one per level)
    #[serde(default = "defaults::circles")]
    pub circles: usize,

    /// Horizontal coordinate range for circle centers
    #[serde(default = "defaults::coord_range")]
    pub coord_range: f32,

    /// Minimum circle radius
    #[serde(default = "defaults::radius_min")]
    pub radius_min: f32,

    /// Maximum circle radius
    #[serde(default = "defaults::radius_max")]
    pub radius_max: f32,

    /// Vertical spacing between consecutive levels
    #[serde(default = "defaults::level_gap")]
    pub level_gap: f32,
}

mod defaults {
    pub fn circles() -> usize {
        10
    }
    pub fn coord_range() -> f32 {
        250.0
    }
    pub fn radius_min() -> f32 {
        10.0
    }
    pub fn radius_max() -> f32 {
        15.0
    }
    pub fn level_gap() -> f32 {
        45.0
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            circles: defaults::circles(),
            coord_range: defaults::coord_range(),
            radius_min: defaults::radius_min(),
            radius_max: defaults::radius_max(),
            level_gap: defaults::level_gap(),
        }
    }
}

/// A generated field plus the terminals that bracket it.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub field: CircleField,
    pub start: Point2D,
    pub goal: Point2D,
}

/// Generate a reproducible scenario from config and seed.
///
/// One circle per level, radii and x positions uniform within the
/// configured ranges, levels spaced by `level_gap` so rows never
/// interleave. Start sits above the first row, goal below the last, both
/// centered horizontally.
pub fn generate(config: &ScenarioConfig, seed: u64) -> Result<Scenario> {
    if !(config.radius_min >= 0.0 && config.radius_max > config.radius_min) {
        return Err(SlalomError::MalformedInput(format!(
            "bad radius range {}..{}",
            config.radius_min, config.radius_max
        )));
    }
    if config.coord_range <= config.radius_max {
        return Err(SlalomError::MalformedInput(format!(
            "coord_range {} does not fit radius_max {}",
            config.coord_range, config.radius_max
        )));
    }
    if config.level_gap < 2.0 * config.radius_max {
        return Err(SlalomError::MalformedInput(format!(
            "level_gap {} lets rows of radius {} overlap",
            config.level_gap, config.radius_max
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut circles = Vec::with_capacity(config.circles);
    for level in 0..config.circles {
        let radius = rng.random_range(config.radius_min..config.radius_max);
        let x = rng.random_range(config.radius_max..config.coord_range);
        let y = config.level_gap * level as f32 + config.radius_max;
        circles.push(Circle::new(Point2D::new(x, y), radius, level as u32));
    }

    let mid_x = config.coord_range * 0.5;
    let start = Point2D::new(mid_x, 0.0);
    let goal = Point2D::new(
        mid_x,
        config.level_gap * config.circles as f32 + config.radius_max,
    );

    let field = CircleField::new(circles)?;
    Ok(Scenario { field, start, goal })
}
