//! Generate a random circle field and plan a route through it.
//!
//! Usage:
//!   cargo run --example plan_field
//!   cargo run --example plan_field -- --seed 7 --circles 25

use clap::Parser;
use slalom_nav::{scenario, solve, ScenarioConfig, Side};

/// Random-field planning demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of circles (one per level)
    #[arg(short, long, default_value_t = 10)]
    circles: usize,

    /// Horizontal coordinate range for circle centers
    #[arg(long, default_value_t = 250.0)]
    coord_range: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = ScenarioConfig {
        circles: args.circles,
        coord_range: args.coord_range,
        ..Default::default()
    };
    let s = scenario::generate(&config, args.seed)?;

    println!(
        "Field: {} circles over {} levels, start=({:.1},{:.1}) goal=({:.1},{:.1})",
        s.field.circles().len(),
        s.field.num_layers(),
        s.start.x,
        s.start.y,
        s.goal.x,
        s.goal.y
    );

    let path = solve(&s.field, s.start, s.goal)?;

    println!(
        "Path: {} waypoints, cost {:.2}, {} nodes expanded",
        path.points.len(),
        path.cost,
        path.nodes_expanded
    );
    for (i, point) in path.points.iter().enumerate() {
        let label = if i == 0 {
            "start".to_string()
        } else if i == path.points.len() - 1 {
            "goal".to_string()
        } else {
            let (circle, side) = path.contacts[i - 1];
            let side = match side {
                Side::Left => "L",
                Side::Right => "R",
            };
            format!("circle {circle} ({side})")
        };
        println!("  ({:7.2}, {:7.2})  {label}", point.x, point.y);
    }

    Ok(())
}
