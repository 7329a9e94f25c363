//! Error types shared by the simulation core.

use thiserror::Error;

use super::Point;

/// Errors raised by grid access and configuration handling.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Coordinate lies outside the `size × size` grid.
    #[error("point ({}, {}) is outside a {size}x{size} grid", .point.x, .point.y)]
    OutOfRange { point: Point, size: usize },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Tile count or alive percentage edited after the first generation.
    #[error("configuration is locked once the game has started (counter = {counter})")]
    ConfigurationLocked { counter: u64 },

    /// The scheduler was torn down and accepts no further changes.
    #[error("scheduler was torn down at generation {counter}")]
    TornDown { counter: u64 },

    /// Configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
