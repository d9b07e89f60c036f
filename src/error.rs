//! Startup errors
//!
//! Core simulation operations are infallible; only loading and validating
//! configuration can fail.

use thiserror::Error;

/// Configuration could not be loaded or is unusable
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}: minimum {min} exceeds maximum {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },

    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },

    #[error("half_fov must stay below pi/2 (got {0})")]
    FieldOfViewTooWide(f32),

    #[error("orb pool capacity must be at least 1")]
    ZeroCapacity,

    #[error("points_per_object must be at least 3 (got {0})")]
    TooFewPoints(usize),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
