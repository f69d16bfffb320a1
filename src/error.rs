//! Error types for slalom-nav.

use thiserror::Error;

/// Planner error type
#[derive(Error, Debug)]
pub enum SlalomError {
    /// Input circles failed validation (geometry or level ordering).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Search frontier emptied before the goal was reached.
    #[error("no path from start to goal")]
    NoPathFound,
}

pub type Result<T> = std::result::Result<T, SlalomError>;
